use crate::model::DirectoryEntry;

/// Entries whose button text (`label number`) contains `query`, ignoring
/// case. A blank query matches everything.
pub fn filter_entries<'a>(entries: &'a [DirectoryEntry], query: &str) -> Vec<&'a DirectoryEntry> {
    let needle = query.trim().to_lowercase();
    entries
        .iter()
        .filter(|e| {
            needle.is_empty()
                || format!("{} {}", e.label, e.number).to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<DirectoryEntry> {
        [("Police", "100"), ("Fire", "101"), ("Ambulance", "102"), ("Emergency Medical Services", "108")]
            .into_iter()
            .map(|(l, n)| DirectoryEntry { label: l.into(), number: n.into() })
            .collect()
    }

    #[test]
    fn blank_query_shows_all() {
        let e = entries();
        assert_eq!(filter_entries(&e, "").len(), 4);
        assert_eq!(filter_entries(&e, "   ").len(), 4);
    }

    #[test]
    fn case_insensitive_label_match() {
        let e = entries();
        let hits: Vec<_> = filter_entries(&e, "AMBU").iter().map(|e| e.label.as_str()).collect();
        assert_eq!(hits, vec!["Ambulance"]);
    }

    #[test]
    fn number_match() {
        let e = entries();
        let hits: Vec<_> = filter_entries(&e, "10").iter().map(|e| e.number.as_str()).collect();
        assert_eq!(hits, vec!["100", "101", "102", "108"]);
        assert!(filter_entries(&e, "911").is_empty());
    }

    #[test]
    fn query_spanning_label_and_number() {
        let e = entries();
        let hits: Vec<_> = filter_entries(&e, "police 100").iter().map(|e| e.number.as_str()).collect();
        assert_eq!(hits, vec!["100"]);
        assert_eq!(filter_entries(&e, "Services 108").len(), 1);
        assert!(filter_entries(&e, "fire 100").is_empty());
    }
}
