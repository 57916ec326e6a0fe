use std::{
    cmp::Reverse,
    collections::{HashMap, HashSet},
};

use crate::invariants::{ClientIp, Endpoint};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UrlStats {
    total_views: usize,
    seen_ips: HashSet<ClientIp>,
}

impl UrlStats {
    pub fn total_views(&self) -> usize {
        self.total_views
    }

    /// Unique-visitor count, always the cardinality of the seen-IP set.
    pub fn unique_ip_count(&self) -> usize {
        self.seen_ips.len()
    }
}

/// Per-URL visit statistics in first-seen order.
///
/// Entries live in a Vec so the order in which URLs first appeared is
/// preserved; the index map keeps the get-or-insert lookup O(1).
/// First-seen order is the tie-break when a ranking sorts equal counts.
#[derive(Debug, Default)]
pub struct Analytics {
    entries: Vec<(Endpoint, UrlStats)>,
    index: HashMap<Endpoint, usize>,
}

impl Analytics {
    pub fn record_visit(&mut self, url: Endpoint, ip: ClientIp) {
        let stats = self.entry_mut(url);
        stats.total_views += 1;
        stats.seen_ips.insert(ip);
    }

    pub fn most_visits(&self) -> Vec<(String, usize)> {
        self.ranked_by(UrlStats::total_views)
    }

    pub fn unique_visits(&self) -> Vec<(String, usize)> {
        self.ranked_by(UrlStats::unique_ip_count)
    }

    fn entry_mut(&mut self, url: Endpoint) -> &mut UrlStats {
        let i = match self.index.get(&url) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(url.clone(), i);
                self.entries.push((url, UrlStats::default()));
                i
            }
        };
        &mut self.entries[i].1
    }

    fn ranked_by(&self, key: impl Fn(&UrlStats) -> usize) -> Vec<(String, usize)> {
        let mut ranked: Vec<_> = self
            .entries
            .iter()
            .map(|(url, stats)| (url.to_string(), key(stats)))
            .collect();
        // stable sort: equal counts keep first-seen order
        ranked.sort_by_key(|(_, count)| Reverse(*count));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;

    fn visit(analytics: &mut Analytics, url: &str, ip: &str) {
        analytics.record_visit(url.into(), ip.parse().unwrap());
    }

    #[test]
    fn fresh_url_starts_with_one_view_and_one_visitor() {
        let mut analytics = Analytics::default();
        visit(&mut analytics, "/about", "10.0.0.1");

        assert_eq!(analytics.most_visits(), vec![("/about".into(), 1)]);
        assert_eq!(analytics.unique_visits(), vec![("/about".into(), 1)]);
    }

    #[test]
    fn repeat_ip_counts_views_but_not_visitors() {
        let mut analytics = Analytics::default();
        visit(&mut analytics, "/about", "10.0.0.1");
        visit(&mut analytics, "/about", "10.0.0.1");

        assert_eq!(analytics.most_visits(), vec![("/about".into(), 2)]);
        assert_eq!(analytics.unique_visits(), vec![("/about".into(), 1)]);
    }

    #[test]
    fn unique_count_never_exceeds_total_views() {
        let mut analytics = Analytics::default();
        for ip in ["10.0.0.1", "10.0.0.2", "10.0.0.1", "::1", "10.0.0.2"] {
            visit(&mut analytics, "/help", ip);
        }

        let (_, total) = analytics.most_visits()[0].clone();
        let (_, unique) = analytics.unique_visits()[0].clone();
        assert_that!(unique).is_in_range(0..=total);
        assert_eq!(unique, 3);
    }

    #[test]
    fn rankings_sort_descending() {
        let mut analytics = Analytics::default();
        visit(&mut analytics, "/help", "10.0.0.1");
        visit(&mut analytics, "/about", "10.0.0.1");
        visit(&mut analytics, "/about", "10.0.0.2");

        let most = analytics.most_visits();
        assert_eq!(most, vec![("/about".into(), 2), ("/help".into(), 1)]);
        for pair in most.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn the_two_rankings_use_their_own_keys() {
        let mut analytics = Analytics::default();
        // /hot: 3 views from one visitor; /niche: 2 views, 2 visitors
        for _ in 0..3 {
            visit(&mut analytics, "/hot", "10.0.0.1");
        }
        visit(&mut analytics, "/niche", "10.0.0.2");
        visit(&mut analytics, "/niche", "10.0.0.3");

        assert_eq!(
            analytics.most_visits(),
            vec![("/hot".into(), 3), ("/niche".into(), 2)]
        );
        assert_eq!(
            analytics.unique_visits(),
            vec![("/niche".into(), 2), ("/hot".into(), 1)]
        );
    }

    #[test]
    fn tied_counts_keep_first_seen_order() {
        let mut analytics = Analytics::default();
        for url in ["/contact", "/home", "/about/2", "/index"] {
            visit(&mut analytics, url, "10.0.0.9");
        }

        let expected: Vec<(String, usize)> = ["/contact", "/home", "/about/2", "/index"]
            .iter()
            .map(|url| (url.to_string(), 1))
            .collect();
        assert_eq!(analytics.most_visits(), expected);
        assert_eq!(analytics.unique_visits(), expected);
    }
}
