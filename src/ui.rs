use crate::models::Bucket;
use crate::view::{BoardView, Column, TaskRow};
use std::time::Duration;

/// Which surface the page opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Setup,
    /// First page after setup: animate the setup surface away, then show the board.
    Reveal { timeout: Option<Duration> },
    Main,
}

pub fn render_page(view: &BoardView, surface: Surface) -> String {
    let (setup_style, setup_reveal, app_style) = match surface {
        Surface::Setup => ("display: flex", "none", "display: none; opacity: 0"),
        Surface::Reveal { .. } => ("display: flex", "pending", "display: none; opacity: 0"),
        Surface::Main => ("display: none", "none", "display: block; opacity: 1"),
    };
    let reveal_timeout_ms = match surface {
        Surface::Reveal {
            timeout: Some(timeout),
        } => timeout.as_millis().to_string(),
        _ => "0".to_string(),
    };

    let columns: String = view.columns.iter().map(render_column).collect();
    let welcome = view.welcome.as_deref().map(html_escape).unwrap_or_default();

    INDEX_HTML
        .replace("{{SETUP_STYLE}}", setup_style)
        .replace("{{SETUP_REVEAL}}", setup_reveal)
        .replace("{{APP_STYLE}}", app_style)
        .replace("{{REVEAL_TIMEOUT_MS}}", &reveal_timeout_ms)
        .replace("{{TODAY}}", &view.today)
        .replace("{{BANNER_STYLE}}", display(view.show_completion_banner))
        .replace("{{ACTION_DISABLED}}", if view.action_disabled { "disabled" } else { "" })
        .replace("{{WELCOME}}", &welcome)
        .replace("{{COLUMNS}}", &columns)
}

fn render_column(column: &Column) -> String {
    let bucket = column.bucket.as_str();
    let items: String = column.tasks.iter().map(render_task).collect();
    let add_form = match column.bucket {
        Bucket::Past => String::new(),
        Bucket::Present | Bucket::Future => format!(
            r#"<form id="add-{bucket}-task-form" class="add-form" method="post" action="/tasks/{bucket}">
          <input id="new-{bucket}-task-input" name="text" type="text" placeholder="Add a task" autocomplete="off" />
          <button type="submit">Add</button>
        </form>"#
        ),
    };

    format!(
        r#"
      <section id="{bucket}-tasks" class="column">
        <h2>{title}</h2>
        <ul class="task-list">{items}</ul>
        <p class="no-tasks-message" style="{empty}">Nothing here.</p>
        {add_form}
      </section>"#,
        title = column.title,
        empty = display(column.show_empty_message),
    )
}

fn render_task(task: &TaskRow) -> String {
    let id = task.id;
    let (checked, completed_class) = if task.completed {
        ("checked", " completed")
    } else {
        ("", "")
    };

    format!(
        r#"
          <li class="task-item" data-id="{id}">
            <form class="task-content" method="post" action="/tasks/{id}/toggle">
              <input type="checkbox" {checked} onchange="this.form.submit()" />
              <span class="task-text{completed_class}">{text}</span>
            </form>
            <form method="post" action="/tasks/{id}/due">
              <input type="date" name="due_date" value="{due}" onchange="this.form.submit()" />
            </form>
          </li>"#,
        text = html_escape(&task.text),
        due = task.due_date,
    )
}

fn display(visible: bool) -> &'static str {
    if visible { "display: block" } else { "display: none" }
}

/// Braces are escaped as well, so user text can never form a template placeholder.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Tasks</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f3f1ea;
      --bg-2: #c9dccf;
      --ink: #26302b;
      --accent: #3f8f6b;
      --accent-2: #2f4858;
      --muted: #7b827d;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4efe6 60%, #f6f4ee 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    h1, h2 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      margin: 0;
    }

    .modal {
      position: fixed;
      inset: 0;
      align-items: center;
      justify-content: center;
      background: rgba(38, 48, 43, 0.35);
      opacity: 1;
      transition: opacity 450ms ease;
    }

    .modal.hidden {
      opacity: 0;
    }

    .modal form {
      width: min(420px, 92vw);
      background: white;
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 12px;
    }

    input[type="text"] {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 10px 12px;
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button:disabled {
      background: var(--muted);
      cursor: not-allowed;
    }

    .app {
      width: min(1040px, 100%);
      margin: 0 auto;
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      transition: opacity 450ms ease;
    }

    .subtitle {
      margin: 6px 0 0;
      color: var(--muted);
    }

    #welcome-message {
      font-size: clamp(1.8rem, 4vw, 2.6rem);
    }

    .columns {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 18px;
      margin: 28px 0;
    }

    .column {
      background: white;
      border-radius: 20px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 12px;
      align-content: start;
    }

    .task-list {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .task-item {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 8px;
    }

    .task-content {
      display: flex;
      align-items: center;
      gap: 8px;
      margin: 0;
    }

    .task-text.completed {
      text-decoration: line-through;
      color: var(--muted);
    }

    .no-tasks-message {
      margin: 0;
      color: var(--muted);
      font-size: 0.95rem;
    }

    .add-form {
      display: flex;
      gap: 8px;
    }

    .add-form input {
      flex: 1;
    }

    #completion-message {
      color: var(--accent);
      font-weight: 600;
    }
  </style>
</head>
<body>
  <div id="setup-modal" class="modal" data-reveal="{{SETUP_REVEAL}}" style="{{SETUP_STYLE}}">
    <form id="setup-form" method="post" action="/setup">
      <h2>Plan your day</h2>
      <input id="name" name="name" type="text" placeholder="Your name" required />
      <input id="task1" name="task1" type="text" placeholder="First task" required />
      <input id="task2" name="task2" type="text" placeholder="Second task" required />
      <input id="task3" name="task3" type="text" placeholder="Third task" required />
      <button type="submit">Start</button>
    </form>
  </div>

  <main id="app-container" class="app" style="{{APP_STYLE}}">
    <header>
      <h1 id="welcome-message">{{WELCOME}}</h1>
      <p class="subtitle">Today is {{TODAY}}.</p>
    </header>

    <section class="columns">{{COLUMNS}}
    </section>

    <p id="completion-message" style="{{BANNER_STYLE}}">Everything is done for now. Nice work!</p>
    <button id="action-button" type="button" {{ACTION_DISABLED}}>Keep going</button>
  </main>

  <script>
    const setupModal = document.getElementById('setup-modal');
    const appContainer = document.getElementById('app-container');
    const revealTimeoutMs = {{REVEAL_TIMEOUT_MS}};

    if (setupModal.dataset.reveal === 'pending') {
      let revealed = false;
      const reveal = () => {
        if (revealed) {
          return;
        }
        revealed = true;
        setupModal.style.display = 'none';
        appContainer.style.display = 'block';
        setTimeout(() => {
          appContainer.style.opacity = '1';
        }, 10);
      };

      setupModal.addEventListener('transitionend', reveal, { once: true });
      requestAnimationFrame(() => setupModal.classList.add('hidden'));
      if (revealTimeoutMs > 0) {
        setTimeout(reveal, revealTimeoutMs);
      }
    }
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SetupForm;
    use crate::store::Board;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    fn seeded(task1: &str) -> Board {
        let mut board = Board::new();
        let form = SetupForm {
            name: "Ana".to_string(),
            task1: task1.to_string(),
            task2: "B".to_string(),
            task3: "C".to_string(),
        };
        board.complete_setup(&form, today()).expect("setup");
        board
    }

    #[test]
    fn setup_page_hides_main_surface() {
        let view = BoardView::project(today(), &Board::new());
        let html = render_page(&view, Surface::Setup);
        assert!(html.contains(r#"data-reveal="none" style="display: flex""#));
        assert!(html.contains(r#"id="app-container" class="app" style="display: none; opacity: 0""#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn reveal_page_carries_fallback_timeout() {
        let view = BoardView::project(today(), &seeded("A"));
        let html = render_page(
            &view,
            Surface::Reveal {
                timeout: Some(Duration::from_millis(800)),
            },
        );
        assert!(html.contains(r#"data-reveal="pending""#));
        assert!(html.contains("const revealTimeoutMs = 800;"));

        let html = render_page(&view, Surface::Reveal { timeout: None });
        assert!(html.contains("const revealTimeoutMs = 0;"));
    }

    #[test]
    fn main_page_renders_rows_with_wiring() {
        let mut board = seeded("A");
        let id = board.tasks()[0].id;
        board.toggle_completion(id);
        let view = BoardView::project(today(), &board);
        let html = render_page(&view, Surface::Main);

        assert!(html.contains("Welcome, Ana!"));
        assert!(html.contains(r#"action="/tasks/1/toggle""#));
        assert!(html.contains(r#"action="/tasks/2/due""#));
        assert!(html.contains(r#"<span class="task-text completed">A</span>"#));
        assert!(html.contains(r#"<span class="task-text">B</span>"#));
        assert!(html.contains(r#"value="2026-01-05""#));
        assert!(html.contains(r#"id="add-present-task-form""#));
        assert!(html.contains(r#"id="add-future-task-form""#));
        assert!(!html.contains(r#"id="add-past-task-form""#));
        assert!(html.contains(r#"<button id="action-button" type="button" >"#));
    }

    #[test]
    fn user_text_is_escaped() {
        let board = seeded("<b>{{WELCOME}}</b>");
        let view = BoardView::project(today(), &board);
        let html = render_page(&view, Surface::Main);
        assert!(html.contains("&lt;b&gt;&#123;&#123;WELCOME&#125;&#125;&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn completion_banner_and_disabled_action() {
        let mut board = seeded("A");
        let ids: Vec<_> = board.tasks().iter().map(|task| task.id).collect();
        for id in ids {
            board.toggle_completion(id);
        }
        let view = BoardView::project(today(), &board);
        let html = render_page(&view, Surface::Main);
        assert!(html.contains(r#"id="completion-message" style="display: block""#));
        assert!(html.contains(r#"<button id="action-button" type="button" disabled>"#));
    }
}
