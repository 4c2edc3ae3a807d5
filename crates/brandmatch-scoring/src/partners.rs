//! Ranking of stored partners by compatibility with the owner's profile.

use brandmatch_core::{BrandProfile, Partner};
use serde::Serialize;
use uuid::Uuid;

use crate::compatibility::score_profiles;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerMatch {
    pub partner_id: Uuid,
    pub name: String,
    pub compatibility_score: u8,
}

/// Score every partner against `profile` and return the best `limit`.
///
/// Without a profile every partner scores 0 and catalog order is kept.
#[must_use]
pub fn find_most_promising_partners(
    profile: Option<&BrandProfile>,
    partners: &[Partner],
    limit: usize,
) -> Vec<PartnerMatch> {
    let mut matches: Vec<PartnerMatch> = partners
        .iter()
        .map(|p| PartnerMatch {
            partner_id: p.id,
            name: p.brand.name.clone(),
            compatibility_score: score_profiles(profile, Some(&p.brand)),
        })
        .collect();

    matches.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));
    matches.truncate(limit);
    matches
}

#[cfg(test)]
mod tests {
    use brandmatch_core::{CompanySize, GeographicFocus};

    use super::*;

    fn brand(name: &str, industry: &str, size: CompanySize) -> BrandProfile {
        BrandProfile {
            name: name.to_string(),
            industry: industry.to_string(),
            company_size: size,
            geographic_focus: GeographicFocus::National,
            ..BrandProfile::default()
        }
    }

    #[test]
    fn best_partner_first() {
        let me = brand("Me", "food", CompanySize::Small);
        let partners = vec![
            Partner::new(brand("Far", "mining", CompanySize::Enterprise)),
            Partner::new(brand("Twin", "food", CompanySize::Small)),
            Partner::new(brand("Near", "beverage", CompanySize::Medium)),
        ];
        let ranked = find_most_promising_partners(Some(&me), &partners, 5);
        let names: Vec<&str> = ranked.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Twin", "Near", "Far"]);
    }

    #[test]
    fn never_exceeds_limit() {
        let me = brand("Me", "food", CompanySize::Small);
        let partners: Vec<Partner> = (0..8)
            .map(|i| Partner::new(brand(&format!("P{i}"), "food", CompanySize::Small)))
            .collect();
        assert_eq!(find_most_promising_partners(Some(&me), &partners, 3).len(), 3);
        assert!(find_most_promising_partners(Some(&me), &partners, 0).is_empty());
    }

    #[test]
    fn missing_profile_scores_everyone_zero() {
        let partners = vec![Partner::new(brand("A", "food", CompanySize::Small))];
        let ranked = find_most_promising_partners(None, &partners, 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].compatibility_score, 0);
    }
}
