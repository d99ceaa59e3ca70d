use crate::models::book::Book;

/// A clicked element as seen by the preview list: it may carry a book id and
/// may have a parent.
pub trait PreviewNode {
    fn preview_id(&self) -> Option<&str>;
    fn parent(&self) -> Option<&Self>;
}

/// Walks from `target` up its ancestors and returns the nearest non-empty id.
pub fn find_preview_id<N: PreviewNode>(target: &N) -> Option<&str> {
    let mut node = Some(target);
    while let Some(current) = node {
        if let Some(id) = current.preview_id().filter(|id| !id.is_empty()) {
            return Some(id);
        }
        node = current.parent();
    }
    None
}

pub fn find_book<'a>(books: &'a [Book], id: &str) -> Option<&'a Book> {
    books.iter().find(|book| book.id == id)
}
