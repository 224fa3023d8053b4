pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef1fb;
      --bg-2: #fbe3ef;
      --ink: #2b2a28;
      --accent: #5b5bd6;
      --accent-2: #c2397f;
      --gold: #d9822b;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(58, 58, 120, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f6f0fa 60%, #fdf4f8 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      padding: 6px;
      background: rgba(58, 58, 120, 0.08);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      color: #6b645d;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent);
      box-shadow: 0 8px 16px rgba(58, 58, 120, 0.12);
    }

    .tab.premium {
      margin-left: auto;
      color: var(--gold);
    }

    .tab.premium.active {
      background: linear-gradient(120deg, #f9d976, #f3a469);
      color: white;
    }

    section.view {
      display: none;
    }

    section.view.active {
      display: grid;
      gap: 18px;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(58, 58, 120, 0.08);
      display: grid;
      gap: 12px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .card h3 {
      margin: 0;
      font-size: 1.05rem;
    }

    form.inline {
      display: flex;
      gap: 8px;
    }

    input[type="text"],
    input[type="number"],
    textarea {
      font: inherit;
      padding: 10px 14px;
      border: 1px solid rgba(58, 58, 120, 0.2);
      border-radius: 12px;
      flex: 1;
    }

    textarea {
      width: 100%;
      min-height: 110px;
      resize: vertical;
    }

    button.action {
      appearance: none;
      border: none;
      border-radius: 12px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.action.pink {
      background: var(--accent-2);
    }

    button.ghost {
      background: transparent;
      border: none;
      cursor: pointer;
      color: #8b857d;
      font-size: 0.95rem;
      padding: 4px;
    }

    button.ghost:hover {
      color: var(--ink);
    }

    button.ghost.danger:hover {
      color: #c63b2b;
    }

    .habit-row {
      display: flex;
      align-items: center;
      gap: 10px;
      padding: 12px;
      background: rgba(58, 58, 120, 0.05);
      border-radius: 14px;
    }

    .habit-row .arrows {
      display: grid;
    }

    .habit-row .name {
      flex: 1;
      font-weight: 600;
    }

    .habit-row .logged {
      display: block;
      font-weight: 400;
      font-size: 0.85rem;
      color: #2d7a4b;
    }

    .habit-row input {
      width: 90px;
      flex: none;
    }

    .prompt {
      padding: 14px;
      background: linear-gradient(120deg, rgba(194, 57, 127, 0.08), rgba(91, 91, 214, 0.08));
      border-radius: 14px;
      font-weight: 600;
    }

    .quote {
      font-style: italic;
      color: #4b4844;
    }

    .report-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 12px;
    }

    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      display: block;
      font-size: 1.4rem;
      font-weight: 600;
      color: var(--accent);
    }

    .insight {
      padding: 12px 14px;
      background: rgba(217, 130, 43, 0.08);
      border-left: 3px solid var(--gold);
      border-radius: 0 12px 12px 0;
    }

    .history-line {
      display: flex;
      justify-content: space-between;
      font-size: 0.92rem;
      color: #5f5c57;
    }

    .history-line .minutes {
      font-weight: 600;
      color: var(--accent);
    }

    .muted {
      color: #8b857d;
      font-size: 0.92rem;
      margin: 0;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .habit-row {
        flex-wrap: wrap;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Tracker</h1>
      <p class="subtitle">Build better habits, one day at a time &middot; <span id="date">{{DATE}}</span></p>
    </header>

    <nav class="tabs">
      <button class="tab active" data-view="today">Today</button>
      <button class="tab" data-view="gratitude">Gratitude</button>
      <button class="tab" data-view="reports">Reports</button>
      <button class="tab" data-view="history">History</button>
      <button class="tab premium" id="premium-toggle">Try Premium</button>
    </nav>

    <p id="status" class="status" data-type=""></p>

    <section class="view active" data-view="today">
      <div class="card">
        <h2>Your Habits</h2>
        <form class="inline" id="add-habit-form">
          <input type="text" id="new-habit-name" placeholder="Add new habit..." />
          <button class="action" type="submit">Add</button>
        </form>
        <div id="habit-list"></div>
      </div>
      <div class="card" id="today-gratitude-card" hidden>
        <h3>Today's Gratitude</h3>
        <p class="quote" id="today-gratitude-text"></p>
      </div>
    </section>

    <section class="view" data-view="gratitude">
      <div class="card">
        <h2>Gratitude Journal</h2>
        <div id="gratitude-open">
          <p class="prompt" id="gratitude-prompt"></p>
          <textarea id="gratitude-text" placeholder="Write your response here..."></textarea>
          <button class="action pink" id="gratitude-save">Save Gratitude Entry</button>
        </div>
        <div id="gratitude-done" hidden>
          <p class="muted" id="gratitude-done-prompt"></p>
          <p class="quote" id="gratitude-done-text"></p>
          <p class="muted">You've completed today's gratitude entry!</p>
        </div>
      </div>
    </section>

    <section class="view" data-view="reports">
      <div class="card" id="insights-card" hidden>
        <h2>AI Insights</h2>
        <div id="insights-list"></div>
      </div>
      <div class="card">
        <h2>Weekly Report</h2>
        <div id="report-week"></div>
      </div>
      <div class="card">
        <h2>Monthly Report</h2>
        <div id="report-month"></div>
      </div>
      <div class="card">
        <h2>Year End Report</h2>
        <div id="report-year"></div>
      </div>
    </section>

    <section class="view" data-view="history">
      <div class="card">
        <h2>Habit History</h2>
        <div id="habit-history"></div>
      </div>
      <div class="card">
        <h2>Gratitude History</h2>
        <div id="gratitude-history"></div>
      </div>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    let overview = null;

    const setStatus = (text, type) => {
      statusEl.textContent = text;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (text) =>
      text.replace(/[&<>"']/g, (c) => ({
        '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
      }[c]));

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.json();
    };

    const post = (path, body) =>
      api(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });

    const renderOverview = () => {
      const list = document.getElementById('habit-list');
      if (overview.habits.length === 0) {
        list.innerHTML = '<p class="muted">No habits yet. Add your first one above.</p>';
      } else {
        list.innerHTML = overview.habits.map((habit, index) => `
          <div class="habit-row" data-id="${habit.id}" data-index="${index}">
            <span class="arrows">
              <button class="ghost" data-op="up" ${index === 0 ? 'disabled' : ''}>&#9650;</button>
              <button class="ghost" data-op="down" ${index === overview.habits.length - 1 ? 'disabled' : ''}>&#9660;</button>
            </span>
            <span class="name">${escapeHtml(habit.name)}
              ${habit.today_minutes != null ? `<span class="logged">Logged: ${habit.today_minutes} minutes today</span>` : ''}
            </span>
            <input type="number" min="1" placeholder="Minutes" />
            <button class="action" data-op="log">Log</button>
            <button class="ghost danger" data-op="delete">&#128465;</button>
          </div>
        `).join('');
      }

      const gratitudeCard = document.getElementById('today-gratitude-card');
      const open = document.getElementById('gratitude-open');
      const done = document.getElementById('gratitude-done');
      if (overview.today_gratitude) {
        gratitudeCard.hidden = false;
        document.getElementById('today-gratitude-text').textContent =
          '"' + overview.today_gratitude.content + '"';
        open.hidden = true;
        done.hidden = false;
        document.getElementById('gratitude-done-prompt').textContent = overview.today_gratitude.prompt;
        document.getElementById('gratitude-done-text').textContent =
          '"' + overview.today_gratitude.content + '"';
      } else {
        gratitudeCard.hidden = true;
        open.hidden = false;
        done.hidden = true;
        document.getElementById('gratitude-prompt').textContent = overview.prompt;
      }

      const premium = document.getElementById('premium-toggle');
      premium.textContent = overview.is_premium ? 'Premium Active' : 'Try Premium';
      premium.classList.toggle('active', overview.is_premium);
      document.getElementById('insights-card').hidden = !overview.is_premium;
    };

    const applyOverview = (data) => {
      overview = data;
      renderOverview();
    };

    const statBlock = (label, value) => `
      <span class="stat"><span class="label">${label}</span><span class="value">${value}</span></span>
    `;

    const renderReport = async (period, targetId) => {
      const stats = await api('/api/report?period=' + period);
      const target = document.getElementById(targetId);
      if (stats.length === 0) {
        target.innerHTML = '<p class="muted">Nothing to report yet.</p>';
        return;
      }
      target.innerHTML = stats.map((stat) => {
        const hours = Math.floor(stat.total_minutes / 60);
        const thirdLabel = period === 'year' ? 'Consistency' : 'Avg/Day';
        const thirdValue = period === 'year' ? stat.consistency_pct + '%' : stat.avg_minutes + 'm';
        return `
          <div>
            <h3>${escapeHtml(stat.name)}</h3>
            <div class="report-grid">
              ${statBlock('Total Time', hours + 'h ' + (stat.total_minutes % 60) + 'm')}
              ${statBlock('Days Tracked', stat.days_tracked)}
              ${statBlock(thirdLabel, thirdValue)}
            </div>
          </div>
        `;
      }).join('');
    };

    const loadReports = async () => {
      await Promise.all([
        renderReport('week', 'report-week'),
        renderReport('month', 'report-month'),
        renderReport('year', 'report-year')
      ]);
      if (overview && overview.is_premium) {
        const data = await api('/api/insights');
        document.getElementById('insights-list').innerHTML = data.insights
          .map((text) => `<p class="insight">${escapeHtml(text)}</p>`)
          .join('');
      }
    };

    const loadHistory = async () => {
      const data = await api('/api/history');
      document.getElementById('habit-history').innerHTML = data.habits.length === 0
        ? '<p class="muted">No habits yet.</p>'
        : data.habits.map((habit) => `
            <div>
              <h3>${escapeHtml(habit.name)}</h3>
              ${habit.entries.map((entry) => `
                <div class="history-line">
                  <span>${entry.date}</span>
                  <span class="minutes">${entry.minutes} minutes</span>
                </div>
              `).join('') || '<p class="muted">Nothing logged yet.</p>'}
            </div>
          `).join('');
      document.getElementById('gratitude-history').innerHTML = data.gratitude.length === 0
        ? '<p class="muted">No entries yet.</p>'
        : data.gratitude.map((entry) => `
            <div>
              <p class="muted">${entry.date} &middot; ${escapeHtml(entry.prompt)}</p>
              <p class="quote">"${escapeHtml(entry.content)}"</p>
            </div>
          `).join('');
    };

    const tabs = document.querySelectorAll('.tab[data-view]');
    const views = document.querySelectorAll('section.view');

    const setActiveTab = (name) => {
      tabs.forEach((tab) => tab.classList.toggle('active', tab.dataset.view === name));
      views.forEach((view) => view.classList.toggle('active', view.dataset.view === name));
      if (name === 'reports') loadReports().catch((err) => setStatus(err.message, 'error'));
      if (name === 'history') loadHistory().catch((err) => setStatus(err.message, 'error'));
    };

    tabs.forEach((tab) => {
      tab.addEventListener('click', () => setActiveTab(tab.dataset.view));
    });

    document.getElementById('add-habit-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const input = document.getElementById('new-habit-name');
      applyOverview(await post('/api/habits', { name: input.value }).catch((err) => {
        setStatus(err.message, 'error');
        return overview;
      }));
      input.value = '';
    });

    document.getElementById('habit-list').addEventListener('click', async (event) => {
      const op = event.target.dataset.op;
      if (!op) return;
      const row = event.target.closest('.habit-row');
      const id = row.dataset.id;
      const index = Number(row.dataset.index);
      try {
        if (op === 'up' || op === 'down') {
          applyOverview(await post('/api/habits/move', { index, direction: op }));
        } else if (op === 'delete') {
          applyOverview(await post('/api/habits/delete', { id }));
        } else if (op === 'log') {
          const minutes = row.querySelector('input').value;
          applyOverview(await post('/api/log', { habit_id: id, minutes }));
          setStatus('Saved', 'ok');
          setTimeout(() => setStatus('', ''), 1200);
        }
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('gratitude-save').addEventListener('click', async () => {
      try {
        applyOverview(await post('/api/gratitude', {
          content: document.getElementById('gratitude-text').value,
          prompt: overview.prompt
        }));
        document.getElementById('gratitude-text').value = '';
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('premium-toggle').addEventListener('click', async () => {
      try {
        applyOverview(await post('/api/premium', { enabled: !overview.is_premium }));
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    api('/api/overview')
      .then(applyOverview)
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
