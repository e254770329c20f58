use crate::form::ActivityDraft;
use crate::models::{ActivityState, Category};
use crate::stats::calorie_totals;

pub fn render_index(date: &str, state: &ActivityState, draft: &ActivityDraft) -> String {
    let totals = calorie_totals(&state.activities);
    let activity = draft.activity();
    let calories = if activity.calories == 0 {
        String::new()
    } else {
        activity.calories.to_string()
    };
    let disabled = if draft.is_valid() { "" } else { " disabled" };

    INDEX_HTML
        .replace("{{DATE}}", &escape_html(date))
        .replace("{{CONSUMED}}", &totals.consumed.to_string())
        .replace("{{BURNED}}", &totals.burned.to_string())
        .replace("{{NET}}", &totals.net.to_string())
        .replace("{{FORM_TITLE}}", if draft.is_editing(state) { "Edit activity" } else { "New activity" })
        .replace("{{CATEGORY_OPTIONS}}", &render_category_options(activity.category))
        .replace("{{ID}}", &escape_html(&activity.id))
        .replace("{{NAME}}", &escape_html(&activity.name))
        .replace("{{CALORIES}}", &calories)
        .replace("{{SUBMIT_LABEL}}", draft.submit_label())
        .replace("{{SUBMIT_DISABLED}}", disabled)
        .replace("{{ACTIVITY_LIST}}", &render_activity_list(state))
        .replace("{{CLEAR_DISABLED}}", if state.is_empty() { " disabled" } else { "" })
}

fn render_category_options(selected: Category) -> String {
    Category::ALL
        .iter()
        .map(|category| {
            let marker = if *category == selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{marker}>{}</option>"#,
                category.code(),
                category.label()
            )
        })
        .collect()
}

fn render_activity_list(state: &ActivityState) -> String {
    if state.is_empty() {
        return r#"<p class="empty">No activities yet.</p>"#.to_string();
    }

    let items: String = state
        .activities
        .iter()
        .map(|activity| {
            let id = escape_html(&activity.id);
            let kind = match activity.category {
                Category::Food => "food",
                Category::Exercise => "exercise",
            };
            let active = if state.active_id.as_deref() == Some(activity.id.as_str()) {
                " active"
            } else {
                ""
            };
            format!(
                r#"<li class="entry{active}">
          <span class="tag {kind}">{label}</span>
          <span class="entry-name">{name}</span>
          <span class="entry-calories">{calories} kcal</span>
          <form method="post" action="/activities/{id}/edit"><button class="btn-small" type="submit">Edit</button></form>
          <form method="post" action="/activities/{id}/delete"><button class="btn-small danger" type="submit">Delete</button></form>
        </li>"#,
                label = activity.category.label(),
                name = escape_html(&activity.name),
                calories = activity.calories,
            )
        })
        .collect();

    format!(r#"<ul class="entries">{items}</ul>"#)
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '{' => escaped.push_str("&#123;"),
            other => escaped.push(other),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Calorie Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef6ec;
      --bg-2: #c7e6c1;
      --ink: #23302a;
      --accent: #e8613c;
      --accent-2: #2f5848;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 88, 72, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f4fbf1 60%, #f7f5ee 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1, h2 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      margin: 0;
    }

    h1 {
      font-size: clamp(2rem, 4vw, 2.8rem);
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5d655f;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 88, 72, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7f877f;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.net {
      color: var(--accent);
    }

    form.activity {
      background: white;
      border-radius: 20px;
      padding: 24px;
      display: grid;
      gap: 14px;
    }

    label {
      font-weight: 600;
    }

    input, select {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 88, 72, 0.25);
      width: 100%;
      background: white;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
    }

    button:disabled {
      opacity: 0.2;
      cursor: default;
    }

    .btn-small {
      padding: 6px 12px;
      font-size: 0.85rem;
    }

    .danger {
      background: var(--accent);
    }

    .entries {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    .entry {
      display: grid;
      grid-template-columns: auto 1fr auto auto auto;
      align-items: center;
      gap: 12px;
      background: white;
      border-radius: 16px;
      padding: 12px 16px;
      border: 1px solid rgba(47, 88, 72, 0.08);
    }

    .entry.active {
      border-color: var(--accent);
    }

    .entry form {
      margin: 0;
    }

    .tag {
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      padding: 4px 10px;
      border-radius: 999px;
      color: white;
    }

    .tag.food {
      background: #4c9a6a;
    }

    .tag.exercise {
      background: #e8913c;
    }

    .entry-calories {
      font-weight: 600;
      color: var(--accent-2);
    }

    .list-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .empty {
      margin: 0;
      color: #6f7670;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Calorie Tracker</h1>
      <p class="subtitle">Summary for <span id="date">{{DATE}}</span></p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Consumed</span>
        <span id="consumed" class="value">{{CONSUMED}}</span>
      </div>
      <div class="stat">
        <span class="label">Net</span>
        <span id="net" class="value net">{{NET}}</span>
      </div>
      <div class="stat">
        <span class="label">Burned</span>
        <span id="burned" class="value">{{BURNED}}</span>
      </div>
    </section>

    <form class="activity" id="activity-form" method="post" action="/activities">
      <h2>{{FORM_TITLE}}</h2>
      <input type="hidden" id="id" name="id" value="{{ID}}" />
      <label for="category">Category</label>
      <select id="category" name="category">{{CATEGORY_OPTIONS}}</select>
      <label for="name">Activity</label>
      <input type="text" id="name" name="name" value="{{NAME}}" placeholder="e.g. Salad, Orange juice, Weights, Bike" />
      <label for="calories">Calories</label>
      <input type="number" id="calories" name="calories" min="0" value="{{CALORIES}}" placeholder="e.g. 300 or 500" />
      <button type="submit" id="submit"{{SUBMIT_DISABLED}}>{{SUBMIT_LABEL}}</button>
    </form>

    <section>
      <div class="list-header">
        <h2>Food and activities</h2>
        <form method="post" action="/activities/clear">
          <button class="btn-small danger" type="submit"{{CLEAR_DISABLED}}>Clear all</button>
        </form>
      </div>
      {{ACTIVITY_LIST}}
    </section>
  </main>

  <script>
    const form = document.getElementById('activity-form');
    const categoryEl = document.getElementById('category');
    const nameEl = document.getElementById('name');
    const caloriesEl = document.getElementById('calories');
    const submitEl = document.getElementById('submit');

    const refreshSubmit = () => {
      const calories = +caloriesEl.value;
      submitEl.disabled = !(nameEl.value.trim() !== '' && calories > 0);
      submitEl.textContent = categoryEl.value === '1' ? 'Save food' : 'Save exercise';
    };

    form.addEventListener('input', refreshSubmit);
    form.addEventListener('change', refreshSubmit);
  </script>
</body>
</html>
"#;
