//! Server-rendered HTML pages
//!
//! Markup is assembled directly; the surface is three pages and a 404, which
//! does not warrant a template engine. Every user-supplied value passes
//! through [`escape_html`] before it reaches the page.

use axum::response::Html;

use crate::database::Customer;
use crate::server::flash::Notice;
use crate::validate::{CustomerForm, Gender};

/// Generic banner for a failed save on the add/update forms
pub const STORE_FAILURE_MESSAGE: &str = "A storage error occurred. Please try again.";

/// Generic banner when the listing query fails
pub const LOAD_FAILURE_MESSAGE: &str = "Could not load customers. Please try again.";

/// Escape a string for inclusion in HTML text or attribute values
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap page content in the shared document shell
fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Rolodex</title>
<style>
  body {{ font-family: sans-serif; margin: 2rem auto; max-width: 48rem; color: #222; }}
  table {{ border-collapse: collapse; width: 100%; }}
  th, td {{ border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }}
  .banner {{ padding: 0.6rem; margin-bottom: 1rem; border-radius: 4px; }}
  .banner.ok {{ background: #e6f4e6; border: 1px solid #8c8; }}
  .banner.err {{ background: #fae6e6; border: 1px solid #c88; }}
  form.inline {{ display: inline; }}
  label {{ display: block; margin-top: 0.8rem; }}
  input, select {{ padding: 0.3rem; width: 16rem; }}
  button {{ margin-top: 1rem; padding: 0.4rem 1rem; }}
</style>
</head>
<body>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        body = body,
    )
}

fn notice_banner(notice: Option<Notice>) -> String {
    match notice {
        Some(n) => {
            let class = if n.is_error() { "err" } else { "ok" };
            format!(
                "<div class=\"banner {}\">{}</div>\n",
                class,
                escape_html(n.message())
            )
        }
        None => String::new(),
    }
}

fn error_banner(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let mut items = String::new();
    for error in errors {
        items.push_str(&format!("<li>{}</li>", escape_html(error)));
    }
    format!("<div class=\"banner err\"><ul>{}</ul></div>\n", items)
}

/// Shared field markup for the add and update forms
///
/// Previously entered values are echoed back so a rejected submission keeps
/// what the user typed.
fn customer_fields(form: &CustomerForm) -> String {
    let mut options = String::new();
    options.push_str("<option value=\"\">-- select --</option>");
    for gender in Gender::ALL {
        let selected = if form.gender == gender.as_str() {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "<option value=\"{value}\"{selected}>{value}</option>",
            value = gender.as_str(),
            selected = selected,
        ));
    }

    format!(
        r#"<label>First name
  <input type="text" name="first_name" value="{first_name}">
</label>
<label>Last name
  <input type="text" name="last_name" value="{last_name}">
</label>
<label>Email
  <input type="text" name="email" value="{email}">
</label>
<label>Location
  <input type="text" name="location" value="{location}">
</label>
<label>Gender
  <select name="gender">{options}</select>
</label>
"#,
        first_name = escape_html(&form.first_name),
        last_name = escape_html(&form.last_name),
        email = escape_html(&form.email),
        location = escape_html(&form.location),
        options = options,
    )
}

/// The customer listing, newest first
pub fn index_page(
    customers: &[Customer],
    notice: Option<Notice>,
    load_failed: bool,
) -> Html<String> {
    let mut body = String::new();
    body.push_str(&notice_banner(notice));
    if load_failed {
        body.push_str(&format!(
            "<div class=\"banner err\">{}</div>\n",
            escape_html(LOAD_FAILURE_MESSAGE)
        ));
    }

    body.push_str("<p><a href=\"/add\">Add a customer</a></p>\n");

    if customers.is_empty() {
        body.push_str("<p>No customers yet.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>ID</th><th>First name</th><th>Last name</th>\
             <th>Email</th><th>Location</th><th>Gender</th><th></th></tr>\n",
        );
        for customer in customers {
            body.push_str(&format!(
                "<tr><td>{id}</td><td>{first}</td><td>{last}</td><td>{email}</td>\
                 <td>{location}</td><td>{gender}</td>\
                 <td><a href=\"/update/{id}\">Edit</a> \
                 <form class=\"inline\" method=\"post\" action=\"/delete/{id}\">\
                 <button type=\"submit\">Delete</button></form></td></tr>\n",
                id = customer.id,
                first = escape_html(&customer.first_name),
                last = escape_html(&customer.last_name),
                email = escape_html(&customer.email),
                location = escape_html(&customer.location),
                gender = customer.gender.as_str(),
            ));
        }
        body.push_str("</table>\n");
    }

    Html(layout("Customers", &body))
}

/// The creation form, empty or re-shown with errors and entered values
pub fn add_page(form: &CustomerForm, errors: &[String]) -> Html<String> {
    let mut body = String::new();
    body.push_str(&error_banner(errors));
    body.push_str("<form method=\"post\" action=\"/add\">\n");
    body.push_str(&customer_fields(form));
    body.push_str("<button type=\"submit\">Add customer</button>\n</form>\n");
    body.push_str("<p><a href=\"/\">Back to listing</a></p>\n");

    Html(layout("Add customer", &body))
}

/// The edit form, pre-filled or re-shown with errors and submitted values
pub fn update_page(id: i64, form: &CustomerForm, errors: &[String]) -> Html<String> {
    let mut body = String::new();
    body.push_str(&error_banner(errors));
    body.push_str(&format!(
        "<form method=\"post\" action=\"/update/{}\">\n",
        id
    ));
    body.push_str(&customer_fields(form));
    body.push_str("<button type=\"submit\">Save changes</button>\n</form>\n");
    body.push_str("<p><a href=\"/\">Back to listing</a></p>\n");

    Html(layout("Update customer", &body))
}

/// Static 404 page
pub fn not_found_page() -> Html<String> {
    Html(layout(
        "Page not found",
        "<p>The page you asked for does not exist.</p>\n<p><a href=\"/\">Back to listing</a></p>\n",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"O'Brien" & Co</b>"#),
            "&lt;b&gt;&quot;O&#39;Brien&quot; &amp; Co&lt;/b&gt;"
        );
    }

    #[test]
    fn test_index_page_escapes_customer_data() {
        let customers = vec![Customer {
            id: 1,
            first_name: "<script>".to_string(),
            last_name: "Li".to_string(),
            email: "jo@x.com".to_string(),
            location: "NY".to_string(),
            gender: Gender::Other,
        }];

        let Html(html) = index_page(&customers, None, false);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_index_page_banner_and_failure() {
        let Html(html) = index_page(&[], Some(Notice::Created), false);
        assert!(html.contains("Customer added successfully!"));

        let Html(html) = index_page(&[], None, true);
        assert!(html.contains(LOAD_FAILURE_MESSAGE));
        assert!(html.contains("No customers yet."));
    }

    #[test]
    fn test_add_page_preserves_entered_values() {
        let form = CustomerForm {
            first_name: "Jo".to_string(),
            gender: "Other".to_string(),
            ..Default::default()
        };
        let errors = vec!["Last name must be at least 2 characters".to_string()];

        let Html(html) = add_page(&form, &errors);
        assert!(html.contains("value=\"Jo\""));
        assert!(html.contains("<option value=\"Other\" selected>"));
        assert!(html.contains("Last name must be at least 2 characters"));
    }

    #[test]
    fn test_update_page_posts_to_id() {
        let form = CustomerForm::default();
        let Html(html) = update_page(7, &form, &[]);
        assert!(html.contains("action=\"/update/7\""));
    }
}
