pub fn render_index(today: &str, year: i32) -> String {
    INDEX_HTML
        .replace("{{TODAY}}", today)
        .replace("{{YEAR}}", &year.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    :root {
      --bg: #f7f5f0;
      --ink: #23221f;
      --muted: #8a867d;
      --card: #ffffff;
      --empty: #ebe8e1;
      --shadow: 0 12px 32px rgba(35, 34, 31, 0.08);
      --lemonade: #ffd700;
      --ocean: #0077be;
      --forest: #228b22;
      --sunset: #ff6347;
      --lavender: #9370db;
      --mint: #98fb98;
    }

    body.dark {
      --bg: #1b1b1d;
      --ink: #f1efe9;
      --muted: #9a968e;
      --card: #262629;
      --empty: #34343a;
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
      background: var(--bg);
      color: var(--ink);
    }

    header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      padding: 20px 28px;
    }

    header h1 { margin: 0; font-size: 1.4rem; }
    header .actions { display: flex; gap: 8px; flex-wrap: wrap; }

    button, select, input {
      font: inherit;
      border-radius: 8px;
      border: 1px solid var(--empty);
      padding: 6px 12px;
      background: var(--card);
      color: var(--ink);
    }

    button { cursor: pointer; }
    button.primary { background: var(--ink); color: var(--bg); border-color: var(--ink); }
    button.danger { color: #c0392b; }

    main {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(520px, 1fr));
      gap: 20px;
      padding: 0 28px 28px;
    }

    .card {
      background: var(--card);
      border-radius: 14px;
      box-shadow: var(--shadow);
      padding: 18px;
    }

    .card-header { display: flex; justify-content: space-between; align-items: start; }
    .card-header h3 { margin: 0 0 4px; }
    .metric { color: var(--muted); font-size: 0.85rem; }

    .heatmap { display: flex; gap: 6px; overflow-x: auto; margin: 14px 0; }
    .month { display: flex; flex-direction: column; gap: 4px; }
    .month-name { font-size: 0.7rem; color: var(--muted); }
    .month-grid {
      display: grid;
      grid-template-rows: repeat(7, 10px);
      grid-auto-flow: column;
      grid-auto-columns: 10px;
      gap: 2px;
    }

    .cell { width: 10px; height: 10px; border-radius: 2px; }
    .cell.day { background: var(--empty); cursor: pointer; }
    .cell.today { outline: 1px solid var(--ink); }
    .cell.has-entry.lemonade { background: var(--lemonade); }
    .cell.has-entry.ocean { background: var(--ocean); }
    .cell.has-entry.forest { background: var(--forest); }
    .cell.has-entry.sunset { background: var(--sunset); }
    .cell.has-entry.lavender { background: var(--lavender); }
    .cell.has-entry.mint { background: var(--mint); }

    .stats { display: flex; gap: 18px; flex-wrap: wrap; }
    .stat-value { font-size: 1.3rem; font-weight: 600; }
    .stat-label { font-size: 0.75rem; color: var(--muted); }

    .empty { text-align: center; color: var(--muted); padding: 60px 0; grid-column: 1 / -1; }

    dialog { border: none; border-radius: 14px; box-shadow: var(--shadow); background: var(--card); color: var(--ink); }
    dialog form { display: flex; flex-direction: column; gap: 10px; min-width: 320px; }
    dialog .row { display: flex; gap: 8px; justify-content: flex-end; }
    .checks { display: grid; grid-template-columns: 1fr 1fr; gap: 4px; font-size: 0.9rem; }

    #tooltip {
      position: fixed;
      pointer-events: none;
      background: var(--ink);
      color: var(--bg);
      font-size: 0.75rem;
      padding: 4px 8px;
      border-radius: 6px;
      display: none;
    }

    #status { font-size: 0.85rem; color: var(--muted); }
    #status.error { color: #c0392b; }
  </style>
</head>
<body>
  <header>
    <div>
      <h1>Habit Tracker</h1>
      <span class="metric">Today is {{TODAY}}</span>
      <span id="status"></span>
    </div>
    <div class="actions">
      <select id="year"></select>
      <button id="theme">Theme</button>
      <button id="export">Export</button>
      <button id="import-btn">Import</button>
      <input id="import" type="file" accept="application/json" hidden />
      <button id="create" class="primary">New habit</button>
    </div>
  </header>

  <main id="habits"></main>
  <div id="tooltip"></div>

  <dialog id="habit-dialog">
    <form id="habit-form" method="dialog">
      <h3 id="habit-title">New habit</h3>
      <input id="habit-name" placeholder="Habit name" required />
      <select id="habit-metric"></select>
      <select id="habit-color"></select>
      <select id="habit-start">
        <option value="sunday">Week starts Sunday</option>
        <option value="monday">Week starts Monday</option>
      </select>
      <select id="habit-privacy">
        <option value="public">Public</option>
        <option value="private">Private</option>
      </select>
      <div id="habit-stats" class="checks"></div>
      <div id="preview"></div>
      <div class="row">
        <button type="button" data-close>Cancel</button>
        <button type="submit" class="primary">Save</button>
      </div>
    </form>
  </dialog>

  <dialog id="entry-dialog">
    <form id="entry-form" method="dialog">
      <h3 id="entry-title"></h3>
      <div id="entry-input"></div>
      <div class="row">
        <button type="button" data-close>Cancel</button>
        <button type="submit" class="primary">Save</button>
      </div>
    </form>
  </dialog>

  <script>
    const TODAY_YEAR = {{YEAR}};
    const habitsEl = document.getElementById('habits');
    const statusEl = document.getElementById('status');
    const tooltipEl = document.getElementById('tooltip');
    const yearEl = document.getElementById('year');
    const habitDialog = document.getElementById('habit-dialog');
    const entryDialog = document.getElementById('entry-dialog');
    let options = null;
    let habits = [];
    let editingId = null;
    let entryTarget = null;

    const setStatus = (text, kind) => {
      statusEl.textContent = text;
      statusEl.className = kind || '';
    };

    const escapeHtml = (text) =>
      String(text).replace(/[&<>"']/g, (c) => ({
        '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
      }[c]));

    const request = async (method, url, body) => {
      const init = { method, headers: {} };
      if (body !== undefined) {
        init.headers['content-type'] = 'application/json';
        init.body = typeof body === 'string' ? body : JSON.stringify(body);
      }
      const res = await fetch(url, init);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const renderHeatmap = (heatmap, habitId) =>
      '<div class="heatmap">' + heatmap.months.map((month) => {
        const cells = month.cells.map((cell) => {
          if (cell.kind === 'padding') {
            return '<div class="cell"></div>';
          }
          const classes = ['cell', 'day', heatmap.color];
          if (cell.hasEntry) classes.push('has-entry');
          if (cell.isToday) classes.push('today');
          return `<div class="${classes.join(' ')}" data-habit="${habitId}" data-date="${cell.date}"></div>`;
        }).join('');
        return `<div class="month"><span class="month-name">${month.name}</span><div class="month-grid">${cells}</div></div>`;
      }).join('') + '</div>';

    const renderStats = (stats) =>
      '<div class="stats">' + stats.map((stat) =>
        `<div><div class="stat-value">${stat.value}</div><div class="stat-label">${escapeHtml(options.statistics.find((s) => s.id === stat.id).label)}</div></div>`
      ).join('') + '</div>';

    const renderHabits = () => {
      if (habits.length === 0) {
        habitsEl.innerHTML = '<div class="empty">No habits yet. Create your first one.</div>';
        return;
      }
      habitsEl.innerHTML = habits.map((habit) => `
        <section class="card">
          <div class="card-header">
            <div>
              <h3>${escapeHtml(habit.name)}</h3>
              <div class="metric">${escapeHtml(habit.metricLabel)}</div>
            </div>
            <div>
              <button data-edit="${habit.id}">Edit</button>
              <button class="danger" data-delete="${habit.id}">Delete</button>
            </div>
          </div>
          ${renderHeatmap(habit.heatmap, habit.id)}
          ${renderStats(habit.displayStats)}
        </section>`).join('');
    };

    const loadHabits = async () => {
      habits = await request('GET', `/api/habits?year=${yearEl.value}`);
      renderHabits();
    };

    const fillForm = (habit) => {
      document.getElementById('habit-title').textContent = habit ? 'Edit habit' : 'New habit';
      document.getElementById('habit-name').value = habit ? habit.name : '';
      document.getElementById('habit-metric').value = habit ? habit.metric.type : 'none';
      document.getElementById('habit-color').value = habit ? habit.color : 'lemonade';
      document.getElementById('habit-start').value = habit ? habit.startDay : 'sunday';
      document.getElementById('habit-privacy').value = habit ? habit.privacy : 'public';
      document.querySelectorAll('#habit-stats input').forEach((box) => {
        box.checked = habit ? habit.selectedStats.includes(box.value) : true;
      });
    };

    const readForm = () => ({
      name: document.getElementById('habit-name').value,
      metricType: document.getElementById('habit-metric').value,
      color: document.getElementById('habit-color').value,
      startDay: document.getElementById('habit-start').value,
      privacy: document.getElementById('habit-privacy').value,
      selectedStats: Array.from(document.querySelectorAll('#habit-stats input:checked')).map((box) => box.value)
    });

    const updatePreview = async () => {
      const view = await request('POST', '/api/preview', readForm());
      document.getElementById('preview').innerHTML =
        renderHeatmap(view.heatmap, 'preview') + renderStats(view.displayStats);
    };

    const openHabitDialog = (habit) => {
      editingId = habit ? habit.id : null;
      fillForm(habit);
      habitDialog.showModal();
      updatePreview().catch((err) => setStatus(err.message, 'error'));
    };

    const openEntryDialog = async (habitId, date) => {
      const habit = habits.find((h) => h.id === habitId);
      const entry = await request('GET', `/api/habits/${habitId}/entries/${date}`);
      entryTarget = { habit, date };
      document.getElementById('entry-title').textContent = `${habit.name}, ${date}`;
      const input = habit.metric.type === 'none'
        ? `<label><input id="entry-value" type="checkbox" ${entry.value ? 'checked' : ''} /> Completed</label>`
        : `<input id="entry-value" type="number" min="0" step="any" value="${entry.value ?? ''}" placeholder="${escapeHtml(habit.metric.unit)}" />`;
      document.getElementById('entry-input').innerHTML = input;
      entryDialog.showModal();
    };

    const populateOptions = () => {
      document.getElementById('habit-metric').innerHTML = options.metricTypes
        .map((m) => `<option value="${m.value}">${escapeHtml(m.label)}</option>`).join('');
      document.getElementById('habit-color').innerHTML = options.colors
        .map((c) => `<option value="${c.class}">${escapeHtml(c.name)}</option>`).join('');
      document.getElementById('habit-stats').innerHTML = options.statistics
        .map((s) => `<label title="${escapeHtml(s.description)}"><input type="checkbox" value="${s.id}" checked /> ${escapeHtml(s.label)}</label>`).join('');
      for (let y = TODAY_YEAR; y > TODAY_YEAR - 5; y--) {
        yearEl.insertAdjacentHTML('beforeend', `<option value="${y}">${y}</option>`);
      }
    };

    habitsEl.addEventListener('click', (event) => {
      const target = event.target;
      if (target.dataset.edit) {
        openHabitDialog(habits.find((h) => h.id === target.dataset.edit));
      } else if (target.dataset.delete) {
        if (confirm('Delete this habit and all of its entries?')) {
          request('DELETE', `/api/habits/${target.dataset.delete}`)
            .then(loadHabits)
            .catch((err) => setStatus(err.message, 'error'));
        }
      } else if (target.dataset.date) {
        openEntryDialog(target.dataset.habit, target.dataset.date)
          .catch((err) => setStatus(err.message, 'error'));
      }
    });

    habitsEl.addEventListener('mouseover', (event) => {
      const { habit, date } = event.target.dataset;
      if (!date) return;
      request('GET', `/api/habits/${habit}/entries/${date}`).then((entry) => {
        tooltipEl.textContent = entry.tooltip;
        tooltipEl.style.left = `${event.clientX + 10}px`;
        tooltipEl.style.top = `${event.clientY - 30}px`;
        tooltipEl.style.display = 'block';
      }).catch(() => {});
    });

    habitsEl.addEventListener('mouseout', () => {
      tooltipEl.style.display = 'none';
    });

    document.getElementById('habit-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const draft = readForm();
      const call = editingId
        ? request('PUT', `/api/habits/${editingId}`, draft)
        : request('POST', '/api/habits', draft);
      call.then(() => {
        habitDialog.close();
        return loadHabits();
      }).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('habit-form').addEventListener('change', () => {
      updatePreview().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('entry-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const input = document.getElementById('entry-value');
      const value = input.type === 'checkbox' ? (input.checked ? 1 : 0) : (parseFloat(input.value) || 0);
      const { habit, date } = entryTarget;
      request('PUT', `/api/habits/${habit.id}/entries/${date}`, { value })
        .then(() => {
          entryDialog.close();
          return loadHabits();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.querySelectorAll('[data-close]').forEach((button) => {
      button.addEventListener('click', () => button.closest('dialog').close());
    });

    document.getElementById('create').addEventListener('click', () => openHabitDialog(null));
    yearEl.addEventListener('change', () => loadHabits().catch((err) => setStatus(err.message, 'error')));

    document.getElementById('theme').addEventListener('click', () => {
      document.body.classList.toggle('dark');
      localStorage.setItem('theme', document.body.classList.contains('dark') ? 'dark' : 'light');
    });
    if (localStorage.getItem('theme') === 'dark') {
      document.body.classList.add('dark');
    }

    document.getElementById('export').addEventListener('click', () => {
      window.location.href = '/api/export';
    });

    document.getElementById('import-btn').addEventListener('click', () => {
      document.getElementById('import').click();
    });

    document.getElementById('import').addEventListener('change', async (event) => {
      const file = event.target.files[0];
      if (!file) return;
      try {
        const result = await request('POST', '/api/import', await file.text());
        setStatus(`Imported ${result.imported} habits`, '');
        await loadHabits();
      } catch (err) {
        setStatus(`Import failed: ${err.message}`, 'error');
      }
      event.target.value = '';
    });

    request('GET', '/api/options')
      .then((data) => {
        options = data;
        populateOptions();
        return loadHabits();
      })
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_filled() {
        let html = render_index("2024-06-10", 2024);
        assert!(html.contains("Today is 2024-06-10"));
        assert!(html.contains("const TODAY_YEAR = 2024;"));
        assert!(!html.contains("{{"));
    }
}
