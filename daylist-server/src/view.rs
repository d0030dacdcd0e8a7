//! HTML rendering for the list page and error pages
//!
//! Pages are built with `write!` into a `String`. Every user-supplied value
//! goes through `escape` before it reaches the markup.

use std::fmt::Write;

use crate::models::{Item, ItemDate};

/// Heading shown on the list page regardless of the requested date
pub const LIST_TITLE: &str = "Today";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page_head(out: &mut String, title: &str) {
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape(title));
    out.push_str("<link rel=\"stylesheet\" href=\"/styles/main.css\">\n");
    out.push_str("</head>\n<body>\n");
}

fn page_foot(out: &mut String) {
    out.push_str("</body>\n</html>\n");
}

/// Render the to-do list for one date.
///
/// `date` is carried in hidden form fields so mutations target the day being
/// viewed.
pub fn render_list(list_title: &str, date: ItemDate, items: &[Item]) -> String {
    let date = date.to_string();
    let mut out = String::new();
    page_head(&mut out, list_title);

    out.push_str("<div class=\"box\" id=\"heading\">\n");
    let _ = writeln!(out, "<h1>{}</h1>", escape(list_title));
    out.push_str("<form class=\"date\" action=\"/\" method=\"get\">\n");
    let _ = writeln!(
        out,
        "<input type=\"date\" name=\"date\" value=\"{}\" onchange=\"this.form.submit()\">",
        date
    );
    out.push_str("</form>\n</div>\n");

    out.push_str("<div class=\"box\">\n");
    for item in items {
        let title = escape(&item.title);
        out.push_str("<div class=\"item\">\n");

        out.push_str("<form action=\"/delete\" method=\"post\">\n");
        let _ = writeln!(
            out,
            "<input type=\"checkbox\" onchange=\"this.form.submit()\" name=\"deleteItemId\" value=\"{}\">",
            item.id
        );
        let _ = writeln!(out, "<input type=\"hidden\" name=\"date\" value=\"{}\">", date);
        out.push_str("</form>\n");

        let _ = writeln!(
            out,
            "<p id=\"title{}\" class=\"title\">{}</p>",
            item.id, title
        );

        out.push_str("<form class=\"edit\" action=\"/edit\" method=\"post\">\n");
        let _ = writeln!(
            out,
            "<input type=\"hidden\" name=\"updatedItemId\" value=\"{}\">",
            item.id
        );
        let _ = writeln!(
            out,
            "<input type=\"text\" name=\"updatedItemTitle\" value=\"{}\" autocomplete=\"off\">",
            title
        );
        let _ = writeln!(out, "<input type=\"hidden\" name=\"date\" value=\"{}\">", date);
        out.push_str("<button type=\"submit\">Save</button>\n</form>\n");

        out.push_str("</div>\n");
    }

    out.push_str("<form class=\"item\" action=\"/add\" method=\"post\">\n");
    out.push_str(
        "<input type=\"text\" name=\"newItem\" placeholder=\"New Item\" autocomplete=\"off\" autofocus>\n",
    );
    let _ = writeln!(out, "<input type=\"hidden\" name=\"date\" value=\"{}\">", date);
    out.push_str("<button class=\"add\" type=\"submit\">+</button>\n</form>\n");
    out.push_str("</div>\n");

    page_foot(&mut out);
    out
}

/// Render a minimal error page.
pub fn render_error(status: u16, message: &str) -> String {
    let mut out = String::new();
    page_head(&mut out, "Error");
    out.push_str("<div class=\"box\" id=\"heading\">\n");
    let _ = writeln!(out, "<h1>Error {}</h1>", status);
    out.push_str("</div>\n<div class=\"box\">\n");
    let _ = writeln!(out, "<p class=\"error\">{}</p>", escape(message));
    out.push_str("<p><a href=\"/\">Back to today</a></p>\n</div>\n");
    page_foot(&mut out);
    out
}
