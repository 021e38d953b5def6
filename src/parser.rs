use crate::constants::rating_from_label;
use crate::types::Book;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Parse all book entries out of one catalogue page.
///
/// Each `article.product_pod` element yields one record, in document order.
/// Missing or malformed fields degrade to empty/absent values rather than
/// failing the parse; a page with no matching elements yields an empty list.
pub fn parse_books_page(html: &str) -> Vec<Book> {
    let document = Html::parse_document(html);
    let book_selector = Selector::parse("article.product_pod").unwrap();

    let mut books = Vec::new();
    for element in document.select(&book_selector) {
        books.push(parse_book(element));
    }
    debug!("Parsed {} book entries", books.len());
    books
}

fn parse_book(element: ElementRef) -> Book {
    let title_selector = Selector::parse("h3 a").unwrap();
    let price_selector = Selector::parse("p.price_color").unwrap();
    let rating_selector = Selector::parse("p.star-rating").unwrap();

    let title = element
        .select(&title_selector)
        .next()
        .and_then(|a| a.value().attr("title"))
        .map(|t| t.trim().to_string())
        .unwrap_or_default();

    let price = element
        .select(&price_selector)
        .next()
        .map(|p| p.text().collect::<String>())
        .map(|p| p.trim().trim_start_matches('£').trim().to_string())
        .unwrap_or_default();

    // The rating word is the second class token, e.g. class="star-rating Three"
    let rating = element
        .select(&rating_selector)
        .next()
        .and_then(|p| p.value().attr("class"))
        .and_then(|classes| classes.split_whitespace().nth(1))
        .and_then(rating_from_label);

    Book { title, price, rating }
}
