//! Sentence-conjunction rewriting. This runs after every other pass
//! because it edits the direction and labels of edges already present.

use log::info;
use rustc_hash::FxHashSet;

use anvaya_types::{EdgeLabel, Relation, Tag, conjunction_partner};

use crate::graph::{NodeId, VakyaGraph};
use crate::node::match_linga_vacana;

impl VakyaGraph {
    /// For every reading whose base is a conjunction Y-pole: reverse its
    /// inbound edges under a `sambadDa-` label, pair it with a matching
    /// T-pole via vākyasambandha, and, for saṁyojaka readings, link it to
    /// every verb. Readings standing in a vīpsā relation are exempt.
    pub(crate) fn add_sentence_conjunctions(&mut self, laks: &[NodeId], krts: &[NodeId]) {
        // Only prathamā kṛts are relevant as verb targets here.
        let mut bases: Vec<NodeId> = laks.to_vec();
        bases.extend(krts.iter().filter(|&&k| self.node(k).is_a(Tag::Prathama)));

        // Vīpsā targets are stable under the rewrite; compute them once.
        let vipsa: FxHashSet<NodeId> = self
            .edges()
            .filter(|&(_, _, l)| l.relation == Relation::Vipsa)
            .map(|(_, v, _)| v)
            .collect();

        for n in self.node_ids() {
            let Some(partner) = conjunction_partner(self.node(n).base()) else {
                continue;
            };
            if vipsa.contains(&n) {
                continue;
            }

            // Reverse inbound edges, marking the label sambaddha.
            for (p, label) in self.inbound(n) {
                self.remove_edge(p, n);
                self.add_edge(n, p, EdgeLabel::sambaddha(label.relation));
            }

            let is_samyojaka = self.node(n).is_a(Tag::Samyojaka);
            for nn in self.node_ids() {
                if self.same_partition(n, nn) {
                    continue;
                }
                if let Some(t_base) = partner {
                    if !vipsa.contains(&nn)
                        && self.node(nn).base() == t_base
                        && match_linga_vacana(self.node(n), self.node(nn))
                    {
                        info!("vākyasambandha {} -> {}", self.node(nn).pada, self.node(n).pada);
                        self.add_edge(nn, n, EdgeLabel::plain(Relation::Vakyasambandha));
                    }
                }
                if is_samyojaka && bases.contains(&nn) {
                    self.add_edge(n, nn, EdgeLabel::plain(Relation::Sambaddhakriya));
                    if partner.is_none() {
                        self.add_edge(nn, n, EdgeLabel::plain(Relation::Vakyasambandha));
                    }
                }
            }
        }
    }
}
