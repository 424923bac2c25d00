use crate::model::{paginated::PaginatedPersonList, person::Person};

/// Slices `people` into the requested page.
///
/// Invalid paging never fails, it degrades to an empty page. `count_total` is
/// always the size of `people`.
#[tracing::instrument(skip(people))]
pub fn paginate(people: &[Person], page: Option<i64>, page_size: Option<i64>) -> PaginatedPersonList {
    let count_total = people.len();

    let persons = match (page, page_size) {
        (None, None) => people.to_vec(),
        (page, page_size) => {
            let page = page.unwrap_or(1);

            match page_size {
                Some(page_size) => page_slice(people, page, page_size).to_vec(),
                // Unbounded page, everything lives on page 1
                None if page == 1 => people.to_vec(),
                None => Vec::new(),
            }
        }
    };

    PaginatedPersonList {
        persons,
        count_total,
    }
}

fn page_slice(people: &[Person], page: i64, page_size: i64) -> &[Person] {
    if page <= 0 || page_size <= 0 {
        return &[];
    }

    let offset = (page - 1).checked_mul(page_size).map(usize::try_from);

    let start = match offset {
        Some(Ok(start)) if start < people.len() => start,
        _ => return &[],
    };

    let page_size = usize::try_from(page_size).unwrap_or(usize::MAX);
    let end = start.saturating_add(page_size).min(people.len());

    &people[start..end]
}
