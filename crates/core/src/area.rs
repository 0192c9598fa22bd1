//! Grouping of venues by (city, state).

use serde::Serialize;

/// All items located in one (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area<T> {
    pub city: String,
    pub state: String,
    pub venues: Vec<T>,
}

/// Group `(city, state, item)` rows into areas.
///
/// Areas appear in the order their first row appears; items keep their
/// relative order. Rows for the same area need not be adjacent.
pub fn group_by_area<T, I>(rows: I) -> Vec<Area<T>>
where
    I: IntoIterator<Item = (String, String, T)>,
{
    let mut areas: Vec<Area<T>> = Vec::new();

    for (city, state, item) in rows {
        match areas
            .iter_mut()
            .find(|area| area.city == city && area.state == state)
        {
            Some(area) => area.venues.push(item),
            None => areas.push(Area {
                city,
                state,
                venues: vec![item],
            }),
        }
    }

    areas
}
