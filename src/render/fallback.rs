//! Inline list page used when no `index.html` template is available.

use askama::Template;

use super::RenderError;
use crate::models::TodoItem;

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <title>To Do List (fallback)</title>
  </head>
  <body>
    <h1>To Do List (fallback)</h1>
    <table border="1" cellpadding="5">
      <tr><th>Task</th><th>Email</th><th>Priority</th></tr>
      {%- for item in todos %}
      <tr><td>{{ item.task }}</td><td>{{ item.email }}</td><td>{{ item.priority }}</td></tr>
      {%- endfor %}
    </table>
    <h2>Add New Item</h2>
    <form action="/submit" method="post">
      <label>Task:</label>
      <input type="text" name="task" required><br><br>

      <label>Email:</label>
      <input type="email" name="email" required><br><br>

      <label>Priority:</label>
      <select name="priority">
        <option>Low</option>
        <option selected>Medium</option>
        <option>High</option>
      </select><br><br>

      <button type="submit">Add</button>
    </form>

    <br>
    <a href="/clear">Clear List</a>
  </body>
</html>
"#
)]
struct FallbackPage<'a> {
    todos: &'a [TodoItem],
}

pub fn fallback_page(todos: &[TodoItem]) -> Result<String, RenderError> {
    Ok(FallbackPage { todos }.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn data_rows(html: &str) -> usize {
        html.matches("<tr><td>").count()
    }

    #[test]
    fn renders_one_row_per_item_in_order() {
        let todos = vec![
            TodoItem::seed(),
            TodoItem {
                task: "Second".to_string(),
                email: "two@example.com".to_string(),
                priority: Priority::Low,
            },
        ];
        let html = fallback_page(&todos).unwrap();

        assert_eq!(data_rows(&html), 2);
        let first = html.find("Buy Milk").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
        assert!(html.contains("<td>antchrobiaka@gmail.com</td><td>Medium</td>"));
    }

    #[test]
    fn empty_list_has_no_data_rows() {
        let html = fallback_page(&[]).unwrap();
        assert_eq!(data_rows(&html), 0);
        assert!(html.contains("<th>Task</th>"));
    }

    #[test]
    fn includes_form_and_clear_link() {
        let html = fallback_page(&[]).unwrap();
        assert!(html.contains(r#"<form action="/submit" method="post">"#));
        assert!(html.contains(r#"<input type="text" name="task" required>"#));
        assert!(html.contains(r#"<input type="email" name="email" required>"#));
        assert!(html.contains("<option selected>Medium</option>"));
        assert!(html.contains(r#"<a href="/clear">Clear List</a>"#));
    }

    #[test]
    fn escapes_item_text() {
        let todos = vec![TodoItem {
            task: "<b>bold</b>".to_string(),
            email: "a@b".to_string(),
            priority: Priority::High,
        }];
        let html = fallback_page(&todos).unwrap();
        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains("&lt;b&gt;bold"));
    }
}
