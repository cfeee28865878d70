use crate::pagination::TextbookPage;

/// Page numbers, ascending, whose block text contains `query` ignoring case.
///
/// List items count as block text. A blank query matches nothing; any other
/// query is matched as given, surrounding whitespace included.
pub fn search(pages: &[TextbookPage], query: &str) -> Vec<usize> {
    if query.trim().is_empty() {
        return vec![];
    }
    let needle = query.to_lowercase();
    pages
        .iter()
        .filter(|page| {
            page.content
                .iter()
                .flat_map(|block| block.texts())
                .any(|text| text.to_lowercase().contains(&needle))
        })
        .map(|page| page.page_number)
        .collect()
}
