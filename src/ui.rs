use crate::content::{
    ABOUT, CONTACTS, DISPLAY_NAME, PROJECTS, SKILLS, TAGLINE, TIMELINE, VENTURES,
};
use crate::models::{BlogPost, ContributionCalendar, DayCell};

const NAV: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/projects", "Projects"),
    ("/blog", "Blog"),
    ("/contact", "Contact"),
    ("/resume", "Resume"),
];

const LEVEL_COLORS: [&str; 5] = ["#161b22", "#0e4429", "#006d32", "#26a641", "#39d353"];
const CELL_PITCH_PX: usize = 13;
const RECENT_POST_LIMIT: usize = 3;

pub fn render_home(
    account: &str,
    calendar: Option<&ContributionCalendar>,
    posts: &[BlogPost],
) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        r#"<section class="stack">
  <h2 class="eyebrow">About</h2>
  <p class="muted lead">{}</p>
</section>
<section class="stack">
  <h2 class="eyebrow">Ventures</h2>
  <p class="muted small">What I'm up to outside of code</p>
"#,
        escape_html(ABOUT)
    ));
    for venture in VENTURES {
        body.push_str(&format!(
            r#"  <a class="item" href="{}" target="_blank" rel="noopener noreferrer"><h3>{}</h3><p class="muted small">{}</p></a>
"#,
            venture.href,
            escape_html(venture.title),
            escape_html(venture.description)
        ));
    }
    body.push_str("</section>\n");

    body.push_str(
        r#"<section class="stack">
  <h2 class="eyebrow">Projects</h2>
  <p class="muted small">Things I'm actively working on</p>
"#,
    );
    for project in PROJECTS {
        body.push_str(&format!(
            r#"  <a class="item" href="{}" target="_blank" rel="noopener noreferrer"><h3>{}</h3><p class="muted small">{}</p></a>
"#,
            project.link,
            escape_html(project.title),
            escape_html(project.description)
        ));
    }
    body.push_str("</section>\n");

    if let Some(calendar) = calendar {
        body.push_str("<section class=\"stack\">\n  <h2 class=\"eyebrow\">GitHub Activity</h2>\n");
        body.push_str(&render_calendar(account, calendar));
        body.push_str("</section>\n");
    }

    body.push_str(
        r#"<section class="stack">
  <h2 class="eyebrow">Recent Posts</h2>
  <p class="muted small">Writing about my experiences and learnings</p>
"#,
    );
    for post in posts.iter().take(RECENT_POST_LIMIT) {
        body.push_str(&format!(
            r#"  <div class="item"><div class="row"><span>{}</span><time class="muted small">{}</time></div><p class="muted small">{}</p></div>
"#,
            escape_html(&post.title),
            escape_html(&post.date),
            escape_html(&post.summary)
        ));
    }
    body.push_str("  <a class=\"small\" href=\"/blog\">All posts</a>\n</section>\n");

    body.push_str(&render_skills());
    body.push_str(&render_timeline());

    body.push_str("<section class=\"stack\">\n  <h2 class=\"eyebrow\">Connect</h2>\n");
    body.push_str(&render_contact_list());
    body.push_str("</section>\n");

    layout("Home", "/", &body)
}

pub fn render_projects() -> String {
    let mut body = page_header("Projects", "Things I've built and working on.");
    for project in PROJECTS {
        let tags: String = project
            .tech
            .iter()
            .map(|tech| format!("<span class=\"tag\">{}</span>", escape_html(tech)))
            .collect();
        body.push_str(&format!(
            r#"<a class="card" href="{}" target="_blank" rel="noopener noreferrer">
  <h2>{}</h2>
  <p class="muted small">{}</p>
  <div class="tags">{}</div>
</a>
"#,
            project.link,
            escape_html(project.title),
            escape_html(project.description),
            tags
        ));
    }
    layout("Projects", "/projects", &body)
}

pub fn render_blog(posts: &[BlogPost]) -> String {
    let mut body = page_header("Blog", "Thoughts on coding, learning, and building things.");
    if posts.is_empty() {
        body.push_str("<p class=\"muted center\">No posts yet. Stay tuned!</p>\n");
    }
    for post in posts {
        body.push_str(&format!(
            r#"<article class="card" id="{}">
  <time class="muted small">{}</time>
  <h2>{}</h2>
  <p class="muted small">{}</p>
</article>
"#,
            escape_html(&post.slug),
            escape_html(&post.date),
            escape_html(&post.title),
            escape_html(&post.summary)
        ));
    }
    layout("Blog", "/blog", &body)
}

pub fn render_resume() -> String {
    let mut body = page_header("Resume", "My skills and experience so far.");
    body.push_str(&render_skills());
    body.push_str(&render_timeline());
    layout("Resume", "/resume", &body)
}

pub fn render_contact() -> String {
    let mut body = page_header("Contact", "Feel free to reach out. I'm always open to connecting.");
    body.push_str(&render_contact_list());
    layout("Contact", "/contact", &body)
}

pub fn render_not_found() -> String {
    let body = r#"<div class="center notfound">
  <h1 class="huge">404</h1>
  <p class="muted">This page doesn't exist.</p>
  <a class="button" href="/">Go home</a>
</div>
"#;
    layout("Not found", "", body)
}

pub fn render_admin(account: &str) -> String {
    let body = ADMIN_HTML.replace("{{ACCOUNT}}", &escape_html(account));
    layout("Admin", "/admin", &body)
}

/// Heatmap of `calendar`: one column per week, one row per weekday.
pub fn render_calendar(account: &str, calendar: &ContributionCalendar) -> String {
    let mut html = String::new();
    let account = escape_html(account);

    html.push_str(&format!(
        r#"<div class="card calendar">
  <div class="row"><p class="small">{} contributions in the last year</p><a class="muted small" href="https://github.com/{account}" target="_blank" rel="noopener noreferrer">@{account}</a></div>
  <div class="scroll"><div class="inline">
    <div class="months">"#,
        calendar.total
    ));
    for month in &calendar.months {
        html.push_str(&format!(
            r#"<span style="left:{}px">{}</span>"#,
            month.column * CELL_PITCH_PX,
            escape_html(&month.label)
        ));
    }
    html.push_str("</div>\n    <div class=\"grid\">\n      <div class=\"days\">");
    for label in ["", "Mon", "", "Wed", "", "Fri", ""] {
        html.push_str(&format!("<span>{label}</span>"));
    }
    html.push_str("</div>\n");

    for week in &calendar.weeks {
        html.push_str("      <div class=\"week\">");
        for slot in week {
            match slot {
                Some(day) => html.push_str(&render_cell(day)),
                None => html.push_str("<div class=\"cell empty\"></div>"),
            }
        }
        html.push_str("</div>\n");
    }

    html.push_str("    </div>\n    <div class=\"legend\"><span>Less</span>");
    for color in LEVEL_COLORS {
        html.push_str(&format!(r#"<div class="cell" style="background:{color}"></div>"#));
    }
    html.push_str("<span>More</span></div>\n  </div></div>\n</div>\n");
    html
}

fn render_cell(day: &DayCell) -> String {
    let color = LEVEL_COLORS[usize::from(day.level).min(LEVEL_COLORS.len() - 1)];
    let plural = if day.count == 1 { "" } else { "s" };
    format!(
        r#"<div class="cell" style="background:{color}" title="{} contribution{plural} on {}"></div>"#,
        day.count, day.date
    )
}

fn render_skills() -> String {
    let mut html = String::from("<section class=\"stack\">\n  <h2 class=\"eyebrow\">Skills</h2>\n");
    for group in SKILLS {
        let items: String = group
            .items
            .iter()
            .map(|item| format!("<span class=\"tag\">{}</span>", escape_html(item)))
            .collect();
        html.push_str(&format!(
            "  <div class=\"card\"><h3 class=\"muted small\">{}</h3><div class=\"tags\">{}</div></div>\n",
            escape_html(group.category),
            items
        ));
    }
    html.push_str("</section>\n");
    html
}

fn render_timeline() -> String {
    let mut html = String::from("<section class=\"stack\">\n  <h2 class=\"eyebrow\">Experience</h2>\n");
    for milestone in TIMELINE {
        html.push_str(&format!(
            "  <div class=\"card\"><span class=\"accent small\">{}</span><h3>{}</h3><p class=\"muted small\">{}</p></div>\n",
            escape_html(milestone.period),
            escape_html(milestone.title),
            escape_html(milestone.description)
        ));
    }
    html.push_str("</section>\n");
    html
}

fn render_contact_list() -> String {
    CONTACTS
        .iter()
        .map(|link| {
            format!(
                "  <a class=\"card\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"><h3>{}</h3><p class=\"muted small\">{}</p></a>\n",
                link.href,
                escape_html(link.label),
                escape_html(link.handle)
            )
        })
        .collect()
}

fn page_header(title: &str, subtitle: &str) -> String {
    format!(
        "<header class=\"page-header\"><h1>{}</h1><p class=\"muted\">{}</p></header>\n",
        escape_html(title),
        escape_html(subtitle)
    )
}

fn layout(title: &str, active: &str, body: &str) -> String {
    let nav: String = NAV
        .iter()
        .map(|(href, label)| {
            let class = if *href == active { " class=\"active\"" } else { "" };
            format!("<a href=\"{href}\"{class}>{label}</a>")
        })
        .collect();
    let footer: String = CONTACTS
        .iter()
        .map(|link| {
            format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                link.href,
                escape_html(link.label)
            )
        })
        .collect();

    LAYOUT_HTML
        .replace("{{TITLE}}", &escape_html(title))
        .replace("{{NAME}}", &escape_html(DISPLAY_NAME))
        .replace("{{TAGLINE}}", &escape_html(TAGLINE))
        .replace("{{NAV}}", &nav)
        .replace("{{LINKS}}", &footer)
        .replace("{{BODY}}", body)
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}} | {{NAME}}</title>
  <style>
    :root {
      --bg: #0a0a0a;
      --card: #141414;
      --card-hover: #1c1c1c;
      --border: #262626;
      --fg: #ededed;
      --muted: #8b8b8b;
      --accent: #6d8cff;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--fg);
      font-family: "Inter", "Segoe UI", sans-serif;
    }

    a {
      color: inherit;
      text-decoration: none;
    }

    aside {
      position: fixed;
      top: 0;
      left: 0;
      height: 100%;
      width: 14rem;
      padding: 24px;
      background: var(--card);
      border-right: 1px solid var(--border);
      display: flex;
      flex-direction: column;
      gap: 32px;
    }

    aside h1 {
      font-size: 1.25rem;
      margin: 0;
    }

    aside nav {
      display: flex;
      flex-direction: column;
      gap: 4px;
      flex: 1;
    }

    aside nav a {
      padding: 10px 12px;
      border-radius: 8px;
      color: var(--muted);
      font-size: 0.9rem;
    }

    aside nav a:hover {
      background: var(--card-hover);
      color: var(--fg);
    }

    aside nav a.active {
      color: var(--accent);
      background: rgba(109, 140, 255, 0.1);
      font-weight: 500;
    }

    aside .links {
      display: flex;
      gap: 12px;
      padding-top: 24px;
      border-top: 1px solid var(--border);
      font-size: 0.85rem;
      color: var(--muted);
    }

    main {
      margin-left: 14rem;
      max-width: 56rem;
      padding: 64px 48px;
      display: grid;
      gap: 48px;
    }

    .page-header h1 {
      font-size: 1.9rem;
      margin: 0 0 8px;
    }

    .stack {
      display: grid;
      gap: 12px;
    }

    .eyebrow {
      font-size: 0.9rem;
      font-weight: 600;
      margin: 0;
    }

    .muted {
      color: var(--muted);
    }

    .small {
      font-size: 0.85rem;
    }

    .accent {
      color: var(--accent);
    }

    .lead {
      line-height: 1.6;
    }

    .center {
      text-align: center;
    }

    .row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .item h3,
    .card h2,
    .card h3 {
      margin: 0 0 4px;
      font-size: 0.95rem;
    }

    .card {
      display: block;
      padding: 18px;
      border-radius: 12px;
      background: var(--card);
      border: 1px solid var(--border);
    }

    a.card:hover,
    a.item:hover h3 {
      border-color: var(--accent);
      color: var(--accent);
    }

    .tags {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .tag {
      font-size: 0.8rem;
      padding: 4px 10px;
      border-radius: 6px;
      background: var(--card-hover);
      border: 1px solid var(--border);
    }

    .button,
    button {
      appearance: none;
      border: none;
      border-radius: 8px;
      padding: 10px 16px;
      background: var(--accent);
      color: white;
      font-size: 0.9rem;
      cursor: pointer;
    }

    button.ghost {
      background: var(--card-hover);
      color: var(--muted);
    }

    input,
    textarea {
      width: 100%;
      padding: 10px 12px;
      border-radius: 8px;
      background: var(--card-hover);
      border: 1px solid var(--border);
      color: var(--fg);
      font: inherit;
    }

    .notfound {
      padding-top: 15vh;
    }

    .huge {
      font-size: 6rem;
      color: var(--accent);
      margin: 0;
    }

    .calendar .scroll {
      overflow-x: auto;
    }

    .calendar .inline {
      display: inline-block;
    }

    .calendar .months {
      position: relative;
      height: 14px;
      margin-left: 28px;
      font-size: 10px;
      color: var(--muted);
    }

    .calendar .months span {
      position: absolute;
      white-space: nowrap;
    }

    .calendar .grid {
      display: flex;
      gap: 2px;
    }

    .calendar .days,
    .calendar .week {
      display: flex;
      flex-direction: column;
      gap: 2px;
    }

    .calendar .days span {
      width: 24px;
      height: 11px;
      font-size: 10px;
      line-height: 11px;
      text-align: right;
      padding-right: 4px;
      color: var(--muted);
    }

    .cell {
      width: 11px;
      height: 11px;
      border-radius: 2px;
    }

    .cell.empty {
      background: transparent;
    }

    .calendar .legend {
      display: flex;
      justify-content: flex-end;
      align-items: center;
      gap: 4px;
      margin-top: 8px;
      font-size: 10px;
      color: var(--muted);
    }

    .hidden {
      display: none;
    }

    .error {
      color: #f87171;
    }

    @media (max-width: 720px) {
      aside {
        position: static;
        width: auto;
        height: auto;
      }

      main {
        margin-left: 0;
        padding: 32px 20px;
      }
    }
  </style>
</head>
<body>
  <aside>
    <a href="/"><h1>{{NAME}}</h1><p class="muted small">{{TAGLINE}}</p></a>
    <nav>{{NAV}}</nav>
    <div class="links">{{LINKS}}</div>
  </aside>
  <main>
{{BODY}}
  </main>
</body>
</html>
"#;

const ADMIN_HTML: &str = r#"<section id="login" class="stack center">
  <h1>Admin Panel</h1>
  <form id="login-form" class="stack">
    <input id="password" type="password" placeholder="Password" autocomplete="current-password" />
    <p id="login-error" class="error small hidden">Wrong password</p>
    <button type="submit" id="login-button">Enter</button>
  </form>
</section>

<section id="dashboard" class="stack hidden">
  <div class="row">
    <div><h1>Dashboard</h1><p class="muted">Welcome back, {{ACCOUNT}}</p></div>
    <button class="ghost" id="logout">Logout</button>
  </div>

  <div class="row"><h2>Blog Posts</h2><button id="new-post">New Post</button></div>
  <div id="post-form" class="card stack hidden">
    <input id="post-title" type="text" placeholder="Post title" />
    <textarea id="post-summary" rows="3" placeholder="Post summary"></textarea>
    <p id="post-error" class="error small hidden"></p>
    <div class="row"><button id="post-save">Publish</button><button class="ghost" id="post-cancel">Cancel</button></div>
  </div>
  <div id="post-list" class="stack"></div>

  <h2>GitHub Activity</h2>
  <h3 class="muted small">Recent Repositories</h3>
  <div id="repos" class="stack"><p class="muted small">Loading...</p></div>
  <h3 class="muted small">Recent Events</h3>
  <div id="events" class="stack"></div>
</section>

<script>
  const SESSION_KEY = 'admin_auth';
  let editing = null;

  const byId = (id) => document.getElementById(id);
  const show = (id, visible) => byId(id).classList.toggle('hidden', !visible);
  const credential = () => sessionStorage.getItem(SESSION_KEY) || '';

  function text(tag, className, value) {
    const node = document.createElement(tag);
    if (className) node.className = className;
    node.textContent = value;
    return node;
  }

  async function login(event) {
    event.preventDefault();
    const password = byId('password').value;
    byId('login-button').disabled = true;
    byId('login-button').textContent = 'Checking...';
    show('login-error', false);
    const res = await fetch('/api/auth', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ password }),
    });
    byId('login-button').disabled = false;
    byId('login-button').textContent = 'Enter';
    if (res.ok) {
      sessionStorage.setItem(SESSION_KEY, password);
      enterDashboard();
    } else {
      show('login-error', true);
    }
  }

  function logout() {
    sessionStorage.removeItem(SESSION_KEY);
    show('dashboard', false);
    show('login', true);
  }

  function enterDashboard() {
    show('login', false);
    show('dashboard', true);
    loadPosts();
    loadActivity();
  }

  function resetForm() {
    editing = null;
    byId('post-title').value = '';
    byId('post-summary').value = '';
    byId('post-save').textContent = 'Publish';
    show('post-error', false);
    show('post-form', false);
  }

  function editPost(post) {
    editing = post;
    byId('post-title').value = post.title;
    byId('post-summary').value = post.summary;
    byId('post-save').textContent = 'Update';
    show('post-form', true);
  }

  async function loadPosts() {
    const res = await fetch('/api/posts');
    const posts = res.ok ? await res.json() : [];
    const list = byId('post-list');
    list.replaceChildren();
    if (posts.length === 0) {
      list.appendChild(text('p', 'muted small', 'No posts yet. Create your first one!'));
    }
    for (const post of posts) {
      const row = document.createElement('div');
      row.className = 'card row';
      const info = document.createElement('div');
      info.appendChild(text('h3', '', post.title));
      info.appendChild(text('p', 'muted small', post.date));
      const actions = document.createElement('div');
      const edit = text('button', 'ghost', 'Edit');
      edit.onclick = () => editPost(post);
      const remove = text('button', 'ghost', 'Delete');
      remove.onclick = () => deletePost(post.slug);
      actions.append(edit, remove);
      row.append(info, actions);
      list.appendChild(row);
    }
  }

  async function savePost() {
    const title = byId('post-title').value.trim();
    const summary = byId('post-summary').value.trim();
    if (!title || !summary) return;
    const res = await fetch('/api/posts', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json', 'x-admin-password': credential() },
      body: JSON.stringify({ slug: editing ? editing.slug : null, title, summary }),
    });
    if (res.status === 401) return logout();
    if (!res.ok) {
      byId('post-error').textContent = await res.text();
      show('post-error', true);
      return;
    }
    resetForm();
    loadPosts();
  }

  async function deletePost(slug) {
    const res = await fetch('/api/posts/' + encodeURIComponent(slug), {
      method: 'DELETE',
      headers: { 'x-admin-password': credential() },
    });
    if (res.status === 401) return logout();
    loadPosts();
  }

  async function loadActivity() {
    const res = await fetch('/api/github/activity');
    const activity = res.ok
      ? await res.json()
      : { repos: [], events: [] };
    const repos = byId('repos');
    repos.replaceChildren();
    for (const repo of activity.repos) {
      const link = document.createElement('a');
      link.className = 'card';
      link.href = repo.html_url;
      link.target = '_blank';
      link.rel = 'noopener noreferrer';
      link.appendChild(text('h3', '', repo.name));
      if (repo.description) link.appendChild(text('p', 'muted small', repo.description));
      const stats = [repo.language, '★ ' + repo.stargazers_count, '⑂ ' + repo.forks_count]
        .filter(Boolean)
        .join('  ');
      link.appendChild(text('p', 'muted small', stats));
      repos.appendChild(link);
    }
    const events = byId('events');
    events.replaceChildren();
    for (const event of activity.events) {
      const row = document.createElement('div');
      row.className = 'card';
      row.appendChild(text('p', 'small', event.description));
      row.appendChild(text('p', 'muted small', event.ago));
      events.appendChild(row);
    }
  }

  byId('login-form').addEventListener('submit', login);
  byId('logout').addEventListener('click', logout);
  byId('new-post').addEventListener('click', () => {
    const open = byId('post-form').classList.contains('hidden');
    resetForm();
    show('post-form', open);
  });
  byId('post-save').addEventListener('click', savePost);
  byId('post-cancel').addEventListener('click', resetForm);

  if (credential()) enterDashboard();
</script>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{build_calendar, visible_calendar, YearSelector};
    use crate::models::{Contributions, DayActivity};
    use chrono::NaiveDate;

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn blog_page_escapes_post_fields() {
        let posts = vec![BlogPost {
            slug: "xss".into(),
            title: "<script>alert(1)</script>".into(),
            date: "2025-01-01".into(),
            summary: "fine".into(),
        }];
        let html = render_blog(&posts);
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert(1)"));
    }

    #[test]
    fn empty_blog_shows_placeholder() {
        assert!(render_blog(&[]).contains("No posts yet. Stay tuned!"));
    }

    #[test]
    fn calendar_renders_one_cell_per_slot() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let contributions = Contributions {
            total: 7,
            days: vec![DayActivity { date: today, count: 1, level: 2 }],
        };
        let calendar = build_calendar(today, YearSelector::Last, &contributions);
        let html = render_calendar("octo", &calendar);

        let cells = html.matches("<div class=\"cell").count();
        assert_eq!(cells, calendar.weeks.len() * 7 + LEVEL_COLORS.len());
        assert!(html.contains("7 contributions in the last year"));
        assert!(html.contains("1 contribution on 2025-03-05"));
        assert!(html.contains("@octo"));
    }

    #[test]
    fn home_hides_calendar_without_contribution_days() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let calendar = visible_calendar(today, YearSelector::Last, &Contributions::default());
        let html = render_home("octo", calendar.as_ref(), &[]);

        assert!(!html.contains("card calendar"));
        assert!(!html.contains("contributions in the last year"));
        assert!(!html.contains("GitHub Activity"));
    }

    #[test]
    fn home_calendar_gets_its_own_section() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let contributions = Contributions {
            total: 3,
            days: vec![DayActivity { date: today, count: 3, level: 1 }],
        };
        let calendar = visible_calendar(today, YearSelector::Last, &contributions);
        let html = render_home("octo", calendar.as_ref(), &[]);

        assert!(html.contains(
            "<section class=\"stack\">\n  <h2 class=\"eyebrow\">GitHub Activity</h2>\n<div class=\"card calendar\">"
        ));
        let projects = html.find("<h2 class=\"eyebrow\">Projects</h2>").unwrap();
        let activity = html.find("GitHub Activity").unwrap();
        let projects_end = projects + html[projects..].find("</section>").unwrap();
        assert!(projects_end < activity);
    }

    #[test]
    fn active_nav_link_is_marked() {
        let html = render_resume();
        assert!(html.contains("<a href=\"/resume\" class=\"active\">Resume</a>"));
        assert!(html.contains("<a href=\"/blog\">Blog</a>"));
    }
}
