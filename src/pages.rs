//! Static HTML pages for the demo web UI.
//!
//! Every page is a self-contained document: the forms submit to the JSON API
//! with inline `fetch` calls and render the raw reply, so no server-side
//! state or templating is involved.

use axum::response::Html;

/// Render the dashboard page.
pub(crate) async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Render the add-memory form.
pub(crate) async fn memory() -> Html<&'static str> {
    Html(MEMORY_HTML)
}

/// Render the node/fact search forms.
pub(crate) async fn search() -> Html<&'static str> {
    Html(SEARCH_HTML)
}

/// Render the recent-episodes viewer.
pub(crate) async fn episodes() -> Html<&'static str> {
    Html(EPISODES_HTML)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Graphiti MCP Client</title>
<style>
body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 44rem; color: #222; }
nav a { margin-right: 1rem; }
.card { border: 1px solid #ccc; border-radius: 6px; padding: 1rem; margin-top: 1.5rem; }
.ok { color: #2e7d32; }
.err { color: #c62828; }
pre { background: #f5f5f5; padding: 0.75rem; overflow-x: auto; }
</style>
</head>
<body>
<h1>Graphiti MCP Client</h1>
<nav>
  <a href="/memory">Add memory</a>
  <a href="/search">Search</a>
  <a href="/episodes">Episodes</a>
</nav>
<div class="card">
  <h2>Server status</h2>
  <p id="status">Checking...</p>
</div>
<script>
async function checkStatus() {
  const status = document.getElementById('status');
  try {
    const response = await fetch('/api/status');
    const data = await response.json();
    if (response.ok) {
      status.textContent = data.message;
      status.className = 'ok';
    } else {
      status.textContent = data.error || 'Status check failed';
      status.className = 'err';
    }
  } catch (err) {
    status.textContent = 'Status check failed: ' + err;
    status.className = 'err';
  }
}
checkStatus();
</script>
</body>
</html>
"##;

const MEMORY_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Add Memory - Graphiti MCP Client</title>
<style>
body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 44rem; color: #222; }
label { display: block; margin-top: 0.75rem; }
input, textarea, select { width: 100%; box-sizing: border-box; padding: 0.4rem; margin-top: 0.25rem; }
textarea { min-height: 8rem; }
button { margin-top: 1rem; padding: 0.5rem 1.25rem; }
pre { background: #f5f5f5; padding: 0.75rem; overflow-x: auto; }
</style>
</head>
<body>
<h1>Graphiti: Add Memory</h1>
<p><a href="/">Back to dashboard</a></p>
<form id="memory-form">
  <label>Name
    <input name="name" required>
  </label>
  <label>Episode body
    <textarea name="episode_body" required></textarea>
  </label>
  <label>Source
    <select name="source">
      <option value="text" selected>text</option>
      <option value="json">json</option>
      <option value="message">message</option>
    </select>
  </label>
  <label>Source description
    <input name="source_description">
  </label>
  <label>Group ID (optional)
    <input name="group_id">
  </label>
  <button type="submit">Add episode</button>
</form>
<h2>Result</h2>
<pre id="result">(nothing yet)</pre>
<script>
document.getElementById('memory-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const elements = event.target.elements;
  const payload = {
    name: elements.name.value,
    episode_body: elements.episode_body.value,
    source: elements.source.value,
    source_description: elements.source_description.value,
  };
  if (elements.group_id.value) {
    payload.group_id = elements.group_id.value;
  }
  const result = document.getElementById('result');
  result.textContent = 'Submitting...';
  try {
    const response = await fetch('/api/add_memory', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload),
    });
    result.textContent = JSON.stringify(await response.json(), null, 2);
  } catch (err) {
    result.textContent = 'Request failed: ' + err;
  }
});
</script>
</body>
</html>
"##;

const SEARCH_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Search - Graphiti MCP Client</title>
<style>
body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 44rem; color: #222; }
label { display: block; margin-top: 0.75rem; }
input, select { width: 100%; box-sizing: border-box; padding: 0.4rem; margin-top: 0.25rem; }
button { margin-top: 1rem; padding: 0.5rem 1.25rem; }
pre { background: #f5f5f5; padding: 0.75rem; overflow-x: auto; }
section { border-top: 1px solid #ccc; margin-top: 1.5rem; padding-top: 0.5rem; }
</style>
</head>
<body>
<h1>Graphiti: Search</h1>
<p><a href="/">Back to dashboard</a></p>
<section>
  <h2>Nodes</h2>
  <form id="node-form">
    <label>Query
      <input name="query" required>
    </label>
    <label>Max nodes
      <input name="max_nodes" type="number" min="1" value="10">
    </label>
    <label>Entity type
      <select name="entity">
        <option value="" selected>(any)</option>
        <option value="Preference">Preference</option>
        <option value="Procedure">Procedure</option>
        <option value="Requirement">Requirement</option>
      </select>
    </label>
    <button type="submit">Search nodes</button>
  </form>
</section>
<section>
  <h2>Facts</h2>
  <form id="fact-form">
    <label>Query
      <input name="query" required>
    </label>
    <label>Max facts
      <input name="max_facts" type="number" min="1" value="10">
    </label>
    <button type="submit">Search facts</button>
  </form>
</section>
<h2>Result</h2>
<pre id="result">(nothing yet)</pre>
<script>
async function runSearch(url, payload) {
  const result = document.getElementById('result');
  result.textContent = 'Searching...';
  try {
    const response = await fetch(url, {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload),
    });
    result.textContent = JSON.stringify(await response.json(), null, 2);
  } catch (err) {
    result.textContent = 'Request failed: ' + err;
  }
}
document.getElementById('node-form').addEventListener('submit', (event) => {
  event.preventDefault();
  const elements = event.target.elements;
  runSearch('/api/search_nodes', {
    query: elements.query.value,
    max_nodes: Number(elements.max_nodes.value) || 10,
    entity: elements.entity.value,
  });
});
document.getElementById('fact-form').addEventListener('submit', (event) => {
  event.preventDefault();
  const elements = event.target.elements;
  runSearch('/api/search_facts', {
    query: elements.query.value,
    max_facts: Number(elements.max_facts.value) || 10,
  });
});
</script>
</body>
</html>
"##;

const EPISODES_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Episodes - Graphiti MCP Client</title>
<style>
body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 44rem; color: #222; }
label { display: block; margin-top: 0.75rem; }
input { width: 100%; box-sizing: border-box; padding: 0.4rem; margin-top: 0.25rem; }
button { margin-top: 1rem; padding: 0.5rem 1.25rem; }
pre { background: #f5f5f5; padding: 0.75rem; overflow-x: auto; }
</style>
</head>
<body>
<h1>Graphiti: Recent Episodes</h1>
<p><a href="/">Back to dashboard</a></p>
<form id="episodes-form">
  <label>Number of episodes
    <input name="last_n" type="number" min="1" value="10">
  </label>
  <label>Group ID (optional)
    <input name="group_id">
  </label>
  <button type="submit">Fetch episodes</button>
</form>
<h2>Result</h2>
<pre id="result">(nothing yet)</pre>
<script>
document.getElementById('episodes-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const elements = event.target.elements;
  const payload = { last_n: Number(elements.last_n.value) || 10 };
  if (elements.group_id.value) {
    payload.group_id = elements.group_id.value;
  }
  const result = document.getElementById('result');
  result.textContent = 'Fetching...';
  try {
    const response = await fetch('/api/get_episodes', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload),
    });
    result.textContent = JSON.stringify(await response.json(), null, 2);
  } catch (err) {
    result.textContent = 'Request failed: ' + err;
  }
});
</script>
</body>
</html>
"##;
