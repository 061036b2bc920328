//! Server-rendered HTML.
//!
//! Deliberately plain string building: the pages are small forms and lists,
//! not worth a templating engine. All user-supplied text goes through
//! `escape` before it reaches a page.

use crate::models::{TodoList, TodoListWithItems};

/// Escape text for interpolation into HTML bodies and attribute values.
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

fn flash_block(flash: Option<&str>) -> String {
    match flash {
        Some(message) => format!("<p>error: {}</p>", escape(message)),
        None => String::new(),
    }
}

pub fn register(flash: Option<&str>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
    <head>
        <title>dinglist</title>
    </head>
    <body>
        <p>Register an account</p>
        {flash}
        <form method="POST">
            <label for="username">Username: </label><input name="username" type="text"><br>
            <label for="password">Password: </label><input name="password" type="password"><br>
            <input type="submit" value="Register">
        </form>
    </body>
</html>"#,
        flash = flash_block(flash)
    )
}

pub fn login(flash: Option<&str>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
    <head>
        <title>dinglist</title>
    </head>
    <body>
        <p>Log in to an account</p>
        {flash}
        <form method="POST">
            <label for="username">Username: </label><input name="username" type="text"><br>
            <label for="password">Password: </label><input name="password" type="password"><br>
            <input type="submit" value="Log in">
        </form>
    </body>
</html>"#,
        flash = flash_block(flash)
    )
}

pub fn todo_lists(lists: &[TodoList]) -> String {
    let entries = lists
        .iter()
        .map(|list| {
            format!(
                r#"<li><a href="/todo-list/{}">{}</a></li>"#,
                list.id,
                escape(&list.title)
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    format!(
        r#"<!DOCTYPE html>
<html>
    <head>
        <title>Todo lists</title>
    </head>
    <body>
        <ul>
            {entries}
        </ul>
        <p>Create new todo list</p>
        <form method="POST">
            <input name="title" type="text"><br>
            <input type="submit" value="Create">
        </form>
    </body>
</html>"#
    )
}

pub fn todo_list(list: &TodoListWithItems) -> String {
    let items = list
        .todos
        .iter()
        .map(|todo| {
            format!(
                r#"<li><input class="todo-list-item" type="checkbox" data-id="{}"{}>{}</li>"#,
                todo.id,
                if todo.done { " checked" } else { "" },
                escape(&todo.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    format!(
        r#"<!DOCTYPE html>
<html>
    <head>
        <title>Todo list - {title}</title>
    </head>
    <body>
        <a href="/todo-list">Back to todo lists</a>
        <h1>{title}</h1>
        <ul>
            {items}
        </ul>
        <p>Add todo item</p>
        <form method="POST">
            <input name="description" type="text"><br>
            <input type="submit" value="Create todo item">
        </form>
        <script>
            let items = document.querySelectorAll(".todo-list-item");
            for (let i = 0; i < items.length; i++) {{
                items[i].addEventListener("click", (ev) => {{
                    let id = Number(ev.target.getAttribute("data-id"));
                    if (!Number.isInteger(id)) {{
                        ev.preventDefault();
                        return;
                    }}
                    fetch("/todo-list/{list_id}/" + id.toString(), {{
                        method: "POST",
                        headers: {{
                            "Content-Type": "application/x-www-form-urlencoded"
                        }},
                        body: "value=" + encodeURIComponent(String(ev.target.checked))
                    }});
                }})
            }}
        </script>
    </body>
</html>"#,
        title = escape(&list.list.title),
        list_id = list.list.id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Todo, TodoList};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("1 & 2")</script>"#),
            "&lt;script&gt;alert(&quot;1 &amp; 2&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("milk"), "milk");
    }

    #[test]
    fn test_user_text_is_escaped_in_pages() {
        let list = TodoListWithItems {
            list: TodoList {
                id: 1,
                owner_id: 1,
                title: "<b>Groceries</b>".to_string(),
            },
            todos: vec![Todo {
                id: 2,
                parent_id: 1,
                description: "milk & honey".to_string(),
                done: true,
            }],
        };

        let html = todo_list(&list);
        assert!(html.contains("&lt;b&gt;Groceries&lt;/b&gt;"));
        assert!(html.contains("milk &amp; honey"));
        assert!(html.contains(r#"data-id="2" checked"#));
    }

    #[test]
    fn test_flash_is_rendered_when_present() {
        assert!(login(Some("Wrong username or password"))
            .contains("<p>error: Wrong username or password</p>"));
        assert!(!login(None).contains("error:"));
    }
}
