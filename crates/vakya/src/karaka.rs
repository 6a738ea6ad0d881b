//! Verb-centered edge passes: kāraka assignment, kriyāviśeṣaṇa,
//! kriyā-kriyā links, avyaya attachment, and bhāvalakṣaṇa.

use log::debug;

use anvaya_types::{
    AVYAYA_KRIYAVISHESHANA, COPULA_DHATUS, DhatuKosha, EdgeLabel, KARMAPRAVACHANIYA_DVITIYA,
    KARMAPRAVACHANIYA_NULL, KARMAPRAVACHANIYA_PANCHAMI, NISHEDHA_BASES, Relation, Tag, TagBits,
};

use crate::graph::{NodeId, VakyaGraph};
use crate::node::{check_sambodhya, match_linga_vacana, match_purusha_vacana};

impl VakyaGraph {
    /// Add kāraka edges out of each verb reading.
    ///
    /// The expected kartā/karma vibhaktis depend on voice: karmaṇi takes
    /// kartā in tṛtīyā and karma in prathamā; kartari takes karma in
    /// dvitīyā and kartā in tṛtīyā for ṇijanta, prathamā otherwise.
    pub(crate) fn add_karakas(&mut self, bases: &[NodeId], dhatus: &dyn DhatuKosha) {
        for &d in bases {
            let dn = self.node(d);
            let dhatu = dn.morph.dhatu().to_string();
            // Sakarmakatva is only knowable for finite forms; assume it
            // for bare kṛts.
            let is_sakarmaka = if dn.is_lakara() || dn.is_a(Tag::AvyayaDhatuRupa) {
                dhatus.is_sakarmaka(&dhatu)
            } else {
                true
            };
            let is_karmani = dn.is_a(Tag::Karmani);
            let is_nijanta = dn.is_a(Tag::Nijanta);
            let (karta_vib, karma_vib) = if is_karmani {
                (Tag::Tritiya, Tag::Prathama)
            } else if is_nijanta {
                (Tag::Tritiya, Tag::Dvitiya)
            } else {
                (Tag::Prathama, Tag::Dvitiya)
            };
            debug!("dhātu {dhatu}: sakarmaka {is_sakarmaka}, karmaṇi {is_karmani}");

            for n in self.node_ids() {
                if self.same_partition(d, n) {
                    continue;
                }
                let dn = self.node(d);
                let nn = self.node(n);
                if nn.is_a(karta_vib) {
                    // Only lakāras and karmaṇi kṛts govern a kartā.
                    if dn.is_lakara() {
                        if match_purusha_vacana(dn, nn) {
                            self.add_edge(d, n, EdgeLabel::plain(Relation::Karta));
                        } else if COPULA_DHATUS.contains(&dhatu.as_str()) {
                            self.add_edge(
                                d,
                                n,
                                EdgeLabel::plain(Relation::KartrSamanadhikarana),
                            );
                        }
                    } else if is_karmani && match_linga_vacana(dn, nn) {
                        self.add_edge(d, n, EdgeLabel::plain(Relation::Karta));
                    }
                } else if nn.is_a(karma_vib)
                    && (dn.is_lakara() || !is_karmani)
                    && is_sakarmaka
                {
                    // Likewise, only lakāras and kartari kṛts govern karma.
                    self.add_edge(d, n, EdgeLabel::plain(Relation::Karma));
                } else if nn.is_a(Tag::Tritiya) {
                    self.add_edge(d, n, EdgeLabel::plain(Relation::Karana));
                } else if nn.is_a(Tag::Chaturthi) {
                    self.add_edge(d, n, EdgeLabel::plain(Relation::Sampradana));
                } else if nn.is_a(Tag::Panchami) {
                    self.add_edge(d, n, EdgeLabel::plain(Relation::Apadana));
                } else if nn.is_a(Tag::Saptami) {
                    self.add_edge(d, n, EdgeLabel::plain(Relation::Adhikarana));
                } else if nn.is_a(Tag::Sambodhana) && check_sambodhya(dn, nn) {
                    self.add_edge(d, n, EdgeLabel::plain(Relation::Sambodhya));
                } else if nn.is_a(Tag::Prathama) && is_nijanta {
                    self.add_edge(d, n, EdgeLabel::plain(Relation::HetuKarta));
                }
            }
        }
    }

    /// Verb → adverbial avyaya edges.
    pub(crate) fn add_kriyavisheshana(&mut self, bases: &[NodeId]) {
        for &d in bases {
            for n in self.node_ids() {
                if self.same_partition(d, n) {
                    continue;
                }
                let nn = self.node(n);
                if nn.is_a(Tag::Avyaya)
                    && (nn.is_a(Tag::Kriyavisheshana)
                        || AVYAYA_KRIYAVISHESHANA.contains(&nn.base()))
                {
                    self.add_edge(d, n, EdgeLabel::plain(Relation::KriyaVisheshana));
                }
            }
        }
    }

    /// Finite verb → participial verb edges: pūrvakāla for ktvā/lyap,
    /// prayojana for tumun, samānakāla for prathamā śatṛ/śānac.
    pub(crate) fn add_kriya_kriya(&mut self, laks: &[NodeId], krts: &[NodeId]) {
        for &d in laks {
            for &n in krts {
                if self.same_partition(d, n) {
                    continue;
                }
                let nn = self.node(n);
                if nn.is_any(TagBits::PURVAKALA) {
                    self.add_edge(d, n, EdgeLabel::plain(Relation::Purvakala));
                } else if nn.is_a(Tag::Tumun) {
                    self.add_edge(d, n, EdgeLabel::plain(Relation::Prayojana));
                } else if nn.is_any(TagBits::SAMANAKALA) && nn.is_a(Tag::Prathama) {
                    self.add_edge(d, n, EdgeLabel::plain(Relation::Samanakala));
                }
            }
        }
    }

    /// Particle attachment: upasarga links from the following verb form,
    /// niṣedha from every verb, karmapravacanīya governance with upapada
    /// case attachment to adjacent positions.
    pub(crate) fn add_avyayas(&mut self, bases: &[NodeId]) {
        for i in 0..self.position_count() {
            for pn in 0..self.partition(i).len() {
                let n = self.partition(i)[pn];
                let node = self.node(n);
                if node.is_a(Tag::Upasarga) {
                    // No upasarga at the last position. The next form may
                    // be another upasarga or any verb form except ktvā.
                    if i + 1 < self.position_count() {
                        for nx in 0..self.partition(i + 1).len() {
                            let nn = self.partition(i + 1)[nx];
                            let next = self.node(nn);
                            if (bases.contains(&nn) && !next.is_a(Tag::Ktva))
                                || next.is_a(Tag::Upasarga)
                            {
                                self.add_edge(nn, n, EdgeLabel::plain(Relation::Upasarga));
                            }
                        }
                    }
                } else if node.is_a(Tag::Avyaya) && NISHEDHA_BASES.contains(&node.base()) {
                    for &b in bases {
                        if !self.same_partition(n, b) {
                            self.add_edge(b, n, EdgeLabel::plain(Relation::Nishedha));
                        }
                    }
                } else if node.is_a(Tag::Karmapravachaniya)
                    && !AVYAYA_KRIYAVISHESHANA.contains(&node.base())
                    && !KARMAPRAVACHANIYA_NULL.contains(&node.base())
                {
                    let base = node.base().to_string();
                    for &b in bases {
                        if !self.same_partition(n, b) {
                            self.add_edge(b, n, EdgeLabel::plain(Relation::Karma));
                        }
                    }
                    // Attach the governed case on either neighbor.
                    let mut neighbors = Vec::new();
                    if i + 1 < self.position_count() {
                        neighbors.extend_from_slice(self.partition(i + 1));
                    }
                    if i > 0 {
                        neighbors.extend_from_slice(self.partition(i - 1));
                    }
                    for nn in neighbors {
                        let next = self.node(nn);
                        if next.is_a(Tag::Dvitiya)
                            && KARMAPRAVACHANIYA_DVITIYA.contains(&base.as_str())
                        {
                            self.add_edge(n, nn, EdgeLabel::plain(Relation::UpapadaDvitiya));
                        } else if next.is_a(Tag::Panchami)
                            && KARMAPRAVACHANIYA_PANCHAMI.contains(&base.as_str())
                        {
                            self.add_edge(n, nn, EdgeLabel::plain(Relation::UpapadaPanchami));
                        }
                    }
                }
            }
        }
    }

    /// Lakāra → saptamī śatṛ/śānac edges (locative absolute).
    pub(crate) fn add_bhavalakshana(&mut self, krts: &[NodeId], laks: &[NodeId]) {
        for &k in krts {
            let kn = self.node(k);
            if !(kn.is_a(Tag::Saptami) && kn.is_any(TagBits::SAMANAKALA)) {
                continue;
            }
            for &l in laks {
                if !self.same_partition(k, l) {
                    self.add_edge(l, k, EdgeLabel::plain(Relation::Bhavalakshana));
                }
            }
        }
    }
}
