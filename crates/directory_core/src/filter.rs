use crate::model::{Company, FilterState};

/// AND of field, location and search sub-predicates. Invalid companies never
/// match, whatever the state.
pub fn matches(company: &Company, state: &FilterState) -> bool {
    company.is_valid()
        && field_matches(company, state.field())
        && location_matches(company, state.location())
        && search_matches(company, state.search_term())
}

/// Full re-scan, input order kept.
pub fn filter_all<'a>(companies: &'a [Company], state: &FilterState) -> Vec<&'a Company> {
    companies.iter().filter(|c| matches(c, state)).collect()
}

// точное совпадение тега
fn field_matches(c: &Company, field: Option<&str>) -> bool {
    match field {
        None => true,
        Some(f) => c.work_field.iter().any(|t| t == f),
    }
}

// подстрока без учёта регистра
fn location_matches(c: &Company, location: Option<&str>) -> bool {
    let Some(loc) = location else { return true };
    let needle = loc.to_lowercase();
    c.locations
        .iter()
        .any(|l| l.to_lowercase().contains(&needle))
}

fn search_matches(c: &Company, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    c.name.to_lowercase().contains(term)
        || c.work_field.iter().any(|t| t.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LatLng;

    fn company(name: &str, locations: &[&str], fields: &[&str]) -> Company {
        Company {
            name: name.into(),
            locations: locations.iter().map(|s| s.to_string()).collect(),
            coordinates: LatLng::new(45.0, -75.0),
            website: "https://example.com".into(),
            linked_in: String::new(),
            work_field: fields.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn sample() -> Vec<Company> {
        vec![
            company("DeepMind", &["London"], &["AI Research"]),
            company("Waabi", &["Toronto", "San Francisco Bay Area"], &["Autonomous Driving", "ai"]),
            company("Clearpath", &["Kitchener"], &["Robotics"]),
        ]
    }

    fn names(v: &[&Company]) -> Vec<String> {
        v.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn unconstrained_keeps_everything_in_order() {
        let cs = sample();
        assert_eq!(
            names(&filter_all(&cs, &FilterState::new())),
            vec!["DeepMind", "Waabi", "Clearpath"]
        );
    }

    #[test]
    fn location_is_case_insensitive_substring() {
        let cs = sample();
        let st = FilterState::new().with_location("francisco");
        assert_eq!(names(&filter_all(&cs, &st)), vec!["Waabi"]);
    }

    #[test]
    fn field_is_exact() {
        let cs = sample();
        assert!(filter_all(&cs, &FilterState::new().with_field("AI")).is_empty());
        assert!(filter_all(&cs, &FilterState::new().with_field("ai research")).is_empty());
        assert_eq!(
            names(&filter_all(&cs, &FilterState::new().with_field("ai"))),
            vec!["Waabi"]
        );
    }

    #[test]
    fn search_hits_name_or_tag() {
        let cs = sample();
        let by_name = FilterState::new().with_search_term("PATH");
        assert_eq!(names(&filter_all(&cs, &by_name)), vec!["Clearpath"]);

        let by_tag = FilterState::new().with_search_term("research");
        assert_eq!(names(&filter_all(&cs, &by_tag)), vec!["DeepMind"]);

        // локация в поиске не участвует
        let by_loc = FilterState::new().with_search_term("kitchener");
        assert!(filter_all(&cs, &by_loc).is_empty());
    }

    #[test]
    fn criteria_are_combined_with_and() {
        let cs = sample();
        let st = FilterState::new()
            .with_search_term("ai")
            .with_location("toronto");
        assert_eq!(names(&filter_all(&cs, &st)), vec!["Waabi"]);

        let st = st.with_field("Robotics");
        assert!(filter_all(&cs, &st).is_empty());
    }

    #[test]
    fn invalid_company_is_never_visible() {
        let mut cs = sample();
        cs.push(company("", &[], &["Robotics"]));
        cs.push(company("Nowhere Inc", &[], &["Robotics"]));
        let mut nan = company("NaN Labs", &["Kitchener"], &["Robotics"]);
        nan.coordinates = LatLng::new(f64::NAN, 0.0);
        cs.push(nan);

        assert_eq!(
            names(&filter_all(&cs, &FilterState::new())),
            vec!["DeepMind", "Waabi", "Clearpath"]
        );
        assert_eq!(
            names(&filter_all(&cs, &FilterState::new().with_field("Robotics"))),
            vec!["Clearpath"]
        );
    }

    #[test]
    fn never_grows_the_collection() {
        let cs = sample();
        for st in [
            FilterState::new(),
            FilterState::new().with_search_term("a"),
            FilterState::new().with_location("o"),
            FilterState::new().with_field("Robotics"),
        ] {
            assert!(filter_all(&cs, &st).len() <= cs.len());
        }
    }
}
