pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      grid-template-columns: 72px 1fr;
      gap: 28px;
      animation: rise 600ms ease;
    }

    .menu__list {
      display: flex;
      flex-direction: column;
      gap: 12px;
    }

    .menu__item {
      appearance: none;
      border: 1px solid rgba(47, 72, 88, 0.12);
      background: white;
      border-radius: 16px;
      width: 56px;
      height: 56px;
      font-size: 1.5rem;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    .menu__item:active {
      transform: scale(0.95);
    }

    .menu__item_active {
      background: var(--accent);
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .menu__add {
      border-style: dashed;
      color: #8b857d;
    }

    .panel {
      display: grid;
      gap: 22px;
      align-content: start;
    }

    header h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.6rem, 4vw, 2.4rem);
      margin: 0 0 10px;
    }

    .progress {
      display: grid;
      gap: 6px;
    }

    .progress__row {
      display: flex;
      justify-content: space-between;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .progress__bar {
      height: 10px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.1);
      overflow: hidden;
    }

    .progress__cover-bar {
      height: 100%;
      width: 0%;
      border-radius: 999px;
      background: var(--accent);
      transition: width 250ms ease;
    }

    .habit {
      display: grid;
      grid-template-columns: 90px 1fr 44px;
      align-items: center;
      gap: 12px;
      background: white;
      border-radius: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      padding: 14px 16px;
    }

    .habit__day {
      font-weight: 600;
      color: var(--accent-2);
    }

    .habit__delete {
      appearance: none;
      border: none;
      background: transparent;
      font-size: 1.1rem;
      cursor: pointer;
      color: #8b857d;
    }

    .habit__form {
      display: grid;
      grid-template-columns: 90px 1fr auto;
      align-items: center;
      gap: 12px;
    }

    input[type="text"],
    input[type="number"] {
      border: 1px solid rgba(47, 72, 88, 0.18);
      border-radius: 12px;
      padding: 12px 14px;
      font-size: 1rem;
      font-family: inherit;
      width: 100%;
    }

    input.error {
      border-color: #c63b2b;
      background: rgba(198, 59, 43, 0.06);
    }

    button.primary {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    button.primary:active {
      transform: scale(0.98);
    }

    .cover {
      position: fixed;
      inset: 0;
      background: rgba(43, 42, 40, 0.45);
      display: grid;
      place-items: center;
      padding: 18px;
    }

    .cover_hidden {
      display: none;
    }

    .popup {
      width: min(420px, 100%);
      background: white;
      border-radius: 24px;
      padding: 28px;
      display: grid;
      gap: 16px;
      box-shadow: var(--shadow);
    }

    .popup h2 {
      margin: 0;
      font-family: "Fraunces", "Georgia", serif;
    }

    .popup__close {
      justify-self: end;
      appearance: none;
      border: none;
      background: transparent;
      font-size: 1.2rem;
      cursor: pointer;
    }

    .icon-label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .icon-select {
      display: flex;
      gap: 10px;
    }

    .icon {
      appearance: none;
      border: 1px solid rgba(47, 72, 88, 0.12);
      background: white;
      border-radius: 14px;
      width: 48px;
      height: 48px;
      font-size: 1.3rem;
      cursor: pointer;
    }

    .icon_active {
      background: var(--accent);
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
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
        grid-template-columns: 1fr;
        padding: 24px 18px;
      }
      .menu__list {
        flex-direction: row;
        flex-wrap: wrap;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <nav>
      <div class="menu__list" id="menu"></div>
      <div style="margin-top: 12px">
        <button class="menu__item menu__add" id="open-popup" type="button" title="New habit">+</button>
      </div>
    </nav>

    <section class="panel">
      <header>
        <h1 class="h1" id="title">Pick a habit</h1>
        <div class="progress">
          <div class="progress__row">
            <span>Progress</span>
            <span class="progress__percent" id="progress-percent">0 %</span>
          </div>
          <div class="progress__bar">
            <div class="progress__cover-bar" id="progress-bar"></div>
          </div>
        </div>
      </header>

      <div id="days"></div>

      <form class="habit habit__form" id="add-day-form">
        <div class="habit__day" id="next-day">Day 1</div>
        <input type="text" name="comment" placeholder="What did you do?" />
        <button class="primary" type="submit">Done</button>
      </form>

      <div class="status" id="status"></div>
    </section>
  </main>

  <div class="cover cover_hidden" id="add-habit-popup">
    <form class="popup" id="add-habit-form">
      <button class="popup__close" id="close-popup" type="button">x</button>
      <h2>New habit</h2>
      <input type="text" name="name" placeholder="Name" />
      <span class="icon-label">Icon</span>
      <div class="icon-select" id="icon-select">
        <button class="icon" type="button" data-icon="sport">&#127939;</button>
        <button class="icon" type="button" data-icon="water">&#128167;</button>
        <button class="icon" type="button" data-icon="food">&#127822;</button>
        <button class="icon" type="button" data-icon="book">&#128218;</button>
      </div>
      <input type="hidden" name="icon" />
      <input type="number" name="target" placeholder="Target days" />
      <button class="primary" type="submit">Add</button>
    </form>
  </div>

  <script>
    const ICONS = { sport: '\u{1F3C3}', water: '\u{1F4A7}', food: '\u{1F34E}', book: '\u{1F4DA}' };

    const menuEl = document.getElementById('menu');
    const titleEl = document.getElementById('title');
    const percentEl = document.getElementById('progress-percent');
    const barEl = document.getElementById('progress-bar');
    const daysEl = document.getElementById('days');
    const nextDayEl = document.getElementById('next-day');
    const statusEl = document.getElementById('status');
    const popupEl = document.getElementById('add-habit-popup');
    const addDayForm = document.getElementById('add-day-form');
    const addHabitForm = document.getElementById('add-habit-form');

    let habits = [];
    let activeId = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const togglePopup = () => {
      popupEl.classList.toggle('cover_hidden');
    };

    const markFields = (form, required, invalid) => {
      for (const field of required) {
        form[field].classList.remove('error');
        if (invalid.includes(field)) {
          form[field].classList.add('error');
        }
      }
    };

    // Empty-field check mirroring the server's validator, so the marks show
    // up without a round-trip. The server still re-validates.
    const collectFields = (form, required) => {
      const values = {};
      const invalid = [];
      for (const field of required) {
        const value = form[field].value;
        if (!value) {
          invalid.push(field);
        }
        values[field] = value;
      }
      markFields(form, required, invalid);
      return invalid.length ? null : values;
    };

    // Incremental sync: create entries for ids not rendered yet, refresh
    // the active class on the rest. Entries are never torn down.
    const renderMenu = (entries) => {
      for (const entry of entries) {
        let item = menuEl.querySelector(`[menu-habit-id="${entry.id}"]`);
        if (!item) {
          item = document.createElement('button');
          item.setAttribute('menu-habit-id', entry.id);
          item.classList.add('menu__item');
          item.type = 'button';
          item.title = entry.name;
          item.textContent = ICONS[entry.icon] || '⭐';
          item.addEventListener('click', () => rerender(entry.id));
          menuEl.appendChild(item);
        }
        item.classList.toggle('menu__item_active', entry.active);
      }
    };

    const renderHeader = (view) => {
      titleEl.textContent = view.title;
    };

    const renderContent = (view) => {
      daysEl.innerHTML = '';
      for (const day of view.days) {
        const row = document.createElement('div');
        row.classList.add('habit');
        const label = document.createElement('div');
        label.classList.add('habit__day');
        label.textContent = `Day ${day.number}`;
        const comment = document.createElement('div');
        comment.textContent = day.comment;
        const remove = document.createElement('button');
        remove.classList.add('habit__delete');
        remove.type = 'button';
        remove.textContent = '✕';
        remove.addEventListener('click', () => deleteDay(day.index));
        row.append(label, comment, remove);
        daysEl.appendChild(row);
      }
      nextDayEl.textContent = view.next_day_label;
    };

    const renderProgress = (view) => {
      percentEl.textContent = view.percent_text;
      barEl.style.width = `${view.bar_width}%`;
    };

    const rerender = async (id) => {
      activeId = id;
      if (!habits.some((habit) => habit.id === id)) {
        return;
      }
      history.replaceState(null, '', `${location.pathname}#${id}`);
      const res = await fetch(`/api/habits/${id}/view`);
      if (!res.ok) {
        return;
      }
      const page = await res.json();
      renderMenu(page.menu);
      renderHeader(page.habit);
      renderContent(page.habit);
      renderProgress(page.habit);
    };

    const loadHabits = async () => {
      const res = await fetch('/api/habits');
      if (!res.ok) {
        throw new Error('Unable to load habits');
      }
      habits = await res.json();
    };

    const applyView = (view) => {
      const habit = habits.find((h) => h.id === view.id);
      if (habit) {
        habit.days = view.days.map((day) => ({ comment: day.comment }));
      }
      renderHeader(view);
      renderContent(view);
      renderProgress(view);
    };

    const addDay = async (values) => {
      const res = await fetch(`/api/habits/${activeId}/days`, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(values)
      });
      if (res.status === 422) {
        const body = await res.json();
        markFields(addDayForm, ['comment'], body.fields || []);
        return;
      }
      if (!res.ok) {
        throw new Error('Unable to save the day');
      }
      addDayForm.comment.value = '';
      applyView(await res.json());
    };

    const deleteDay = async (index) => {
      const res = await fetch(`/api/habits/${activeId}/days/${index}`, { method: 'DELETE' });
      if (!res.ok) {
        throw new Error('Unable to remove the day');
      }
      applyView(await res.json());
    };

    const addHabit = async (values) => {
      const res = await fetch('/api/habits', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(values)
      });
      if (res.status === 422) {
        const body = await res.json();
        markFields(addHabitForm, ['name', 'icon', 'target'], body.fields || []);
        return;
      }
      if (!res.ok) {
        throw new Error('Unable to add the habit');
      }
      const created = await res.json();
      addHabitForm.name.value = '';
      addHabitForm.target.value = '';
      togglePopup();
      await loadHabits();
      rerender(created.id);
    };

    addDayForm.addEventListener('submit', (event) => {
      event.preventDefault();
      const values = collectFields(addDayForm, ['comment']);
      if (!values || activeId === null) {
        return;
      }
      addDay(values).catch((err) => setStatus(err.message, 'error'));
    });

    addHabitForm.addEventListener('submit', (event) => {
      event.preventDefault();
      const values = collectFields(addHabitForm, ['name', 'icon', 'target']);
      if (!values) {
        return;
      }
      addHabit(values).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('open-popup').addEventListener('click', togglePopup);
    document.getElementById('close-popup').addEventListener('click', togglePopup);

    for (const button of document.querySelectorAll('.icon')) {
      button.addEventListener('click', () => {
        addHabitForm.icon.value = button.dataset.icon;
        const current = document.querySelector('.icon.icon_active');
        if (current) {
          current.classList.remove('icon_active');
        }
        button.classList.add('icon_active');
      });
    }

    const boot = async () => {
      await loadHabits();
      if (habits.length === 0) {
        setStatus('No habits yet. Add the first one with the + button.');
        return;
      }
      const fragmentId = Number(location.hash.replace('#', ''));
      const fromFragment = habits.find((habit) => habit.id === fragmentId);
      rerender(fromFragment ? fromFragment.id : habits[0].id);
    };

    boot().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
