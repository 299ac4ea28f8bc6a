//! Record selection by ID

use crate::records::Record;

/// First record in `records` whose ID equals `id`, in collection order
pub fn select<R: Record>(records: &[R], id: i64) -> Option<&R> {
    records.iter().find(|record| record.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Artist, ConcertDate};

    fn artists(ids: &[i64]) -> Vec<Artist> {
        ids.iter()
            .map(|&id| Artist {
                id,
                name: format!("artist-{id}"),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_every_present_id_selects_its_record() {
        let records = artists(&[1, 2, 3, 52]);
        for id in [1, 2, 3, 52] {
            let found = select(&records, id).expect("present ID should be found");
            assert_eq!(found.id, id);
            assert_eq!(found.name, format!("artist-{id}"));
        }
    }

    #[test]
    fn test_absent_ids_are_not_found() {
        let records = artists(&[1, 2, 3]);
        for id in [0, -1, 4, 9, i64::MAX, i64::MIN] {
            assert!(select(&records, id).is_none(), "id {id} should be absent");
        }
    }

    #[test]
    fn test_empty_collection() {
        let records: Vec<ConcertDate> = Vec::new();
        assert!(select(&records, 1).is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let mut records = artists(&[4, 4]);
        records[1].name = "second".to_string();
        assert_eq!(select(&records, 4).unwrap().name, "artist-4");
    }
}
