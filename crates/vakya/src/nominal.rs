//! Nominal-nominal edge passes: viśeṣaṇa agreement, samāsa and
//! ṣaṣṭhī-sambandha chaining, and vīpsā repetition.

use anvaya_types::{EdgeLabel, Relation, Tag, TagBits};

use crate::graph::VakyaGraph;
use crate::node::match_linga_vacana_vibhakti;

impl VakyaGraph {
    /// Attributive modification between any two case-bearing readings of
    /// different positions and different bases that agree in vibhakti,
    /// vacana, and liṅga. Both directions are added; the validator keeps
    /// modifier chains in check.
    pub(crate) fn add_visheshana(&mut self) {
        for n in self.node_ids() {
            if !self.node(n).is_any(TagBits::VIBHAKTI) {
                continue;
            }
            for no in self.node_ids() {
                if self.same_partition(n, no) {
                    continue;
                }
                let a = self.node(n);
                let b = self.node(no);
                if match_linga_vacana_vibhakti(a, b) && a.base() != b.base() {
                    self.add_edge(n, no, EdgeLabel::plain(Relation::Visheshana));
                }
            }
        }
    }

    /// Samasta links: a compound non-final member is governed by the
    /// following noun or compound member.
    pub(crate) fn add_samastas(&mut self) {
        for i in 0..self.position_count().saturating_sub(1) {
            for pn in 0..self.partition(i).len() {
                let n = self.partition(i)[pn];
                if !self.node(n).is_a(Tag::SamasaPurvapada) {
                    continue;
                }
                for nx in 0..self.partition(i + 1).len() {
                    let nn = self.partition(i + 1)[nx];
                    let next = self.node(nn);
                    if next.is_any(TagBits::VIBHAKTI) || next.is_a(Tag::SamasaPurvapada) {
                        self.add_edge(nn, n, EdgeLabel::plain(Relation::Samasta));
                    }
                }
            }
        }
    }

    /// Ṣaṣṭhī-sambandha links to the immediately following noun or
    /// compound member.
    pub(crate) fn add_shashthi(&mut self) {
        for i in 0..self.position_count().saturating_sub(1) {
            for pn in 0..self.partition(i).len() {
                let n = self.partition(i)[pn];
                if !self.node(n).is_a(Tag::Shashthi) {
                    continue;
                }
                for nx in 0..self.partition(i + 1).len() {
                    let nn = self.partition(i + 1)[nx];
                    let next = self.node(nn);
                    if next.is_any(TagBits::VIBHAKTI) || next.is_a(Tag::SamasaPurvapada) {
                        self.add_edge(nn, n, EdgeLabel::plain(Relation::ShashthiSambandha));
                    }
                }
            }
        }
    }

    /// Vīpsā: consecutive positions with identical surface forms.
    pub(crate) fn add_vipsa(&mut self) {
        for n in self.node_ids() {
            for no in self.node_ids() {
                let a = self.node(n);
                let b = self.node(no);
                if a.index + 1 == b.index && a.pada == b.pada {
                    self.add_edge(n, no, EdgeLabel::plain(Relation::Vipsa));
                }
            }
        }
    }
}
