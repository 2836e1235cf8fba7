use std::collections::BTreeSet;

/// Classification assigned to a single domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    NoActiveAds,
    ActiveAds,
    NonAdvertiser,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::NoActiveAds => "Advertiser with No Active Ads",
            Label::ActiveAds => "Advertiser with Active Ads",
            Label::NonAdvertiser => "Non-Advertiser",
        }
    }
}

/// Three-way partition of the supplied domain set, plus the creative-ID
/// cross-check count. The sets are pairwise disjoint and their union is
/// exactly the input set.
#[derive(Debug, Default)]
pub struct Classification {
    pub no_ads: BTreeSet<String>,
    pub active_ads: BTreeSet<String>,
    pub non_advertisers: BTreeSet<String>,
    pub distinct_creative_ids: usize,
}

impl Classification {
    /// Domains classified as advertisers, with or without active ads.
    pub fn classified_advertisers(&self) -> usize {
        self.no_ads.len() + self.active_ads.len()
    }

    pub fn total_domains(&self) -> usize {
        self.no_ads.len() + self.active_ads.len() + self.non_advertisers.len()
    }

    /// All classified domains with their labels, in export order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, Label)> + '_ {
        self.no_ads
            .iter()
            .map(|d| (d.as_str(), Label::NoActiveAds))
            .chain(
                self.active_ads
                    .iter()
                    .map(|d| (d.as_str(), Label::ActiveAds)),
            )
            .chain(
                self.non_advertisers
                    .iter()
                    .map(|d| (d.as_str(), Label::NonAdvertiser)),
            )
    }
}
