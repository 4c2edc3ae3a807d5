//! Relevance ranking over the resource catalog.

use brandmatch_core::profile::normalize_key;
use brandmatch_core::{BrandProfile, PartnershipType, Resource};
use serde::Serialize;

const RELATED_SAME_INDUSTRY: u32 = 2;
const RELATED_SAME_PARTNERSHIP_TYPE: u32 = 2;
const RELATED_SAME_TYPE: u32 = 1;

const RECOMMENDED_SAME_INDUSTRY: u32 = 3;
const RECOMMENDED_OBJECTIVE_MATCH: u32 = 2;

/// Objectives each partnership type typically serves.
#[must_use]
pub fn objectives_for(partnership_type: PartnershipType) -> &'static [&'static str] {
    match partnership_type {
        PartnershipType::CoBranding => &["brand-awareness", "brand-positioning", "customer-loyalty"],
        PartnershipType::CoMarketing => &["brand-awareness", "lead-generation", "audience-growth"],
        PartnershipType::Sponsorship => &["brand-awareness", "community-engagement"],
        PartnershipType::JointVenture => &["market-expansion", "revenue-growth", "innovation"],
        PartnershipType::Affiliate => &["revenue-growth", "lead-generation"],
        PartnershipType::ProductCollaboration => {
            &["innovation", "revenue-growth", "product-development"]
        }
        PartnershipType::ContentCollaboration => &[
            "audience-growth",
            "thought-leadership",
            "community-engagement",
        ],
        PartnershipType::Event => &["community-engagement", "lead-generation", "brand-awareness"],
        PartnershipType::Other => &[],
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResource<'a> {
    pub resource: &'a Resource,
    pub score: u32,
}

fn rank<'a>(
    mut scored: Vec<RankedResource<'a>>,
    limit: usize,
) -> Vec<RankedResource<'a>> {
    // Stable sort keeps catalog order between equal scores.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}

/// Resources most similar to `current`, excluding `current` itself.
#[must_use]
pub fn related_resources<'a>(
    current: &Resource,
    catalog: &'a [Resource],
    limit: usize,
) -> Vec<RankedResource<'a>> {
    let current_slug = current.slug();
    let current_industry = normalize_key(&current.industry);

    let scored = catalog
        .iter()
        .filter(|r| r.slug() != current_slug)
        .map(|resource| {
            let mut score = 0;
            if normalize_key(&resource.industry) == current_industry {
                score += RELATED_SAME_INDUSTRY;
            }
            if resource.partnership_type == current.partnership_type {
                score += RELATED_SAME_PARTNERSHIP_TYPE;
            }
            if resource.resource_type == current.resource_type {
                score += RELATED_SAME_TYPE;
            }
            RankedResource { resource, score }
        })
        .collect();

    rank(scored, limit)
}

/// Resources most useful to a brand with the given profile.
#[must_use]
pub fn recommended_resources<'a>(
    profile: &BrandProfile,
    catalog: &'a [Resource],
    limit: usize,
) -> Vec<RankedResource<'a>> {
    let industry = profile.industry_key();
    let objectives = profile.objective_keys();

    let scored = catalog
        .iter()
        .map(|resource| {
            let mut score = 0;
            if normalize_key(&resource.industry) == industry {
                score += RECOMMENDED_SAME_INDUSTRY;
            }
            if objectives_for(resource.partnership_type)
                .iter()
                .any(|o| objectives.contains(*o))
            {
                score += RECOMMENDED_OBJECTIVE_MATCH;
            }
            RankedResource { resource, score }
        })
        .collect();

    rank(scored, limit)
}

#[cfg(test)]
mod tests {
    use brandmatch_core::resources::ResourceType;
    use brandmatch_core::{default_catalog, PartnershipPreferences};
    use chrono::NaiveDate;

    use super::*;

    fn resource(
        title: &str,
        industry: &str,
        partnership_type: PartnershipType,
        resource_type: ResourceType,
    ) -> Resource {
        Resource {
            title: title.to_string(),
            description: None,
            industry: industry.to_string(),
            partnership_type,
            resource_type,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn catalog() -> Vec<Resource> {
        vec![
            resource("A", "retail", PartnershipType::CoBranding, ResourceType::Guide),
            resource("B", "retail", PartnershipType::Event, ResourceType::Guide),
            resource("C", "food", PartnershipType::CoBranding, ResourceType::Guide),
            resource("D", "food", PartnershipType::Affiliate, ResourceType::Template),
            resource("E", "retail", PartnershipType::CoBranding, ResourceType::Webinar),
        ]
    }

    fn titles(ranked: &[RankedResource<'_>]) -> Vec<String> {
        ranked.iter().map(|r| r.resource.title.clone()).collect()
    }

    #[test]
    fn related_excludes_self_and_orders_by_score() {
        let catalog = catalog();
        let ranked = related_resources(&catalog[0], &catalog, 3);
        // E: 2+2 = 4, B: 2+1 = 3, C: 2+1 = 3, D: 0
        assert_eq!(titles(&ranked), vec!["E", "B", "C"]);
        assert_eq!(ranked[0].score, 4);
        assert!(ranked.iter().all(|r| r.resource.title != "A"));
    }

    #[test]
    fn related_respects_limit() {
        let catalog = catalog();
        assert_eq!(related_resources(&catalog[0], &catalog, 1).len(), 1);
        assert_eq!(related_resources(&catalog[0], &catalog, 10).len(), 4);
    }

    #[test]
    fn recommended_scores_industry_and_objectives() {
        let catalog = catalog();
        let profile = BrandProfile {
            industry: "Food".to_string(),
            partnership: PartnershipPreferences {
                objectives: ["revenue-growth".to_string()].into_iter().collect(),
                preferred_types: Vec::new(),
            },
            ..BrandProfile::default()
        };
        let ranked = recommended_resources(&profile, &catalog, 5);
        // D: food + affiliate serves revenue-growth = 5, C: food = 3, others 0
        assert_eq!(ranked[0].resource.title, "D");
        assert_eq!(ranked[0].score, 5);
        assert_eq!(ranked[1].resource.title, "C");
        assert_eq!(ranked[1].score, 3);
        assert_eq!(ranked.len(), 5);
    }

    #[test]
    fn recommended_on_builtin_catalog_is_bounded() {
        let catalog = default_catalog();
        let ranked = recommended_resources(&BrandProfile::default(), &catalog, 2);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn every_real_type_serves_some_objective() {
        for t in [
            PartnershipType::CoBranding,
            PartnershipType::CoMarketing,
            PartnershipType::Sponsorship,
            PartnershipType::JointVenture,
            PartnershipType::Affiliate,
            PartnershipType::ProductCollaboration,
            PartnershipType::ContentCollaboration,
            PartnershipType::Event,
        ] {
            assert!(!objectives_for(t).is_empty(), "{t} has no objectives");
        }
    }
}
