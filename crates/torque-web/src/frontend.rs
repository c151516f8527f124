//! Embedded single-page HTML frontend.

/// The complete HTML frontend as a static string.
pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Torque</title>
<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
:root{--bg:#15171c;--panel:#1f232b;--input:#2a2f3a;--user:#34506e;--text:#e6e6e6;--muted:#8b919c;--accent:#f08a24;--border:#333a46}
html,body{height:100%;font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,Helvetica,Arial,sans-serif;background:var(--bg);color:var(--text)}
body{display:flex;flex-direction:column}
.header{display:flex;align-items:center;gap:12px;padding:12px 20px;background:var(--panel);border-bottom:1px solid var(--border)}
.header h1{font-size:18px;font-weight:600}
.header h1 span{color:var(--accent)}
.vehicle{display:flex;gap:8px;margin-left:auto}
.vehicle input{width:90px;padding:6px 8px;border-radius:6px;border:1px solid var(--border);background:var(--input);color:var(--text)}
#log{flex:1;overflow-y:auto;padding:20px;display:flex;flex-direction:column;gap:12px}
.msg{max-width:760px;padding:10px 14px;border-radius:10px;white-space:pre-wrap;line-height:1.45}
.msg.user{align-self:flex-end;background:var(--user)}
.msg.assistant{align-self:flex-start;background:var(--panel);border:1px solid var(--border)}
.msg.error{align-self:flex-start;border:1px solid var(--accent);color:var(--accent)}
.sources{margin-top:8px;font-size:13px;color:var(--muted)}
.sources a{color:var(--accent)}
form{display:flex;gap:8px;padding:12px 20px;background:var(--panel);border-top:1px solid var(--border)}
form textarea{flex:1;resize:none;height:48px;padding:10px;border-radius:8px;border:1px solid var(--border);background:var(--input);color:var(--text);font:inherit}
form button{padding:0 18px;border:none;border-radius:8px;background:var(--accent);color:#111;font-weight:600;cursor:pointer}
form button:disabled{opacity:.5;cursor:default}
</style>
</head>
<body>
<div class="header">
  <h1><span>Torque</span> repair assistant</h1>
  <div class="vehicle">
    <input id="year" placeholder="Year">
    <input id="make" placeholder="Make">
    <input id="model" placeholder="Model">
  </div>
</div>
<div id="log"></div>
<form id="chat">
  <textarea id="text" placeholder="Describe the problem..."></textarea>
  <button id="send" type="submit">Send</button>
</form>
<script>
const turns = [];
const log = document.getElementById('log');
const form = document.getElementById('chat');
const text = document.getElementById('text');
const send = document.getElementById('send');

function field(id) {
  const v = document.getElementById(id).value.trim();
  return v === '' ? null : v;
}

function append(cls, body, sources) {
  const el = document.createElement('div');
  el.className = 'msg ' + cls;
  el.textContent = body;
  if (sources && sources.length) {
    const list = document.createElement('div');
    list.className = 'sources';
    list.append('Sources:');
    sources.forEach((s, i) => {
      const row = document.createElement('div');
      const a = document.createElement('a');
      a.href = s.url;
      a.target = '_blank';
      a.rel = 'noopener';
      a.textContent = (i + 1) + '. ' + s.title;
      row.appendChild(a);
      list.appendChild(row);
    });
    el.appendChild(list);
  }
  log.appendChild(el);
  log.scrollTop = log.scrollHeight;
}

form.addEventListener('submit', async (e) => {
  e.preventDefault();
  const content = text.value.trim();
  if (!content) return;
  text.value = '';
  turns.push({ role: 'user', content });
  append('user', content);
  send.disabled = true;
  try {
    const resp = await fetch('/api/chat', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({
        messages: turns,
        car_info: { year: field('year'), make: field('make'), model: field('model') },
      }),
    });
    const data = await resp.json();
    if (data.success) {
      turns.push({ role: 'assistant', content: data.message });
      append('assistant', data.message, data.web_results);
    } else {
      turns.pop();
      append('error', data.error || 'Request failed');
    }
  } catch (err) {
    turns.pop();
    append('error', String(err));
  } finally {
    send.disabled = false;
    text.focus();
  }
});

text.addEventListener('keydown', (e) => {
  if (e.key === 'Enter' && !e.shiftKey) {
    e.preventDefault();
    form.requestSubmit();
  }
});
</script>
</body>
</html>
"##;
