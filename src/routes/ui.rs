use axum::{response::Html, routing::get, Router};

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Study Helper AI</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 2rem auto; max-width: 860px; color: #1d1d1f; }
    h1 { margin-bottom: 0.5rem; }
    .card { border: 1px solid #ddd; padding: 1rem; border-radius: 8px; margin-bottom: 1rem; }
    label { display: block; margin-top: 0.75rem; font-weight: 600; }
    input[type=text], select { width: 100%; padding: 0.5rem; box-sizing: border-box; }
    button { margin-top: 1rem; margin-right: 0.5rem; padding: 0.6rem 1rem; }
    pre { background: #f6f8fa; padding: 1rem; overflow: auto; white-space: pre-wrap; }
    .hint { color: #666; font-size: 0.9rem; }
    .success { color: #1a7f37; }
    .warning { color: #9a6700; }
    .error { color: #cf222e; }
    .hidden { display: none; }
  </style>
</head>
<body>
  <h1>📘 Study Helper AI</h1>
  <p>Upload your study notes, then ask a question sized to the marks it carries.</p>

  <div class="card">
    <h2>1) Upload notes (PDF or DOCX)</h2>
    <input id="fileInput" type="file" accept=".pdf,.docx" />
    <div id="uploadStatus"></div>
  </div>

  <div id="notesCard" class="card hidden">
    <h2>Preview</h2>
    <pre id="preview"></pre>
    <button id="downloadBtn">Download extracted text</button>
    <button id="printBtn">Open printable view</button>
  </div>

  <div id="askCard" class="card hidden">
    <h2>2) Ask a question</h2>
    <label for="question">Question</label>
    <input id="question" type="text" />
    <p class="hint">Examples: "Summarize key points about photosynthesis", "Explain the causes of World War I", "Differentiate between mitosis and meiosis".</p>
    <label for="marks">Marks</label>
    <select id="marks">
      <option value="2">2</option>
      <option value="5">5</option>
      <option value="10">10</option>
      <option value="15">15</option>
    </select>
    <button id="askBtn">Generate Answer</button>
  </div>

  <div class="card">
    <h2>🧾 Generated Answer</h2>
    <div id="answerStatus"></div>
    <pre id="answer"></pre>
  </div>

  <script>
    let extractedText = '';

    const uploadStatus = document.getElementById('uploadStatus');
    const answerStatus = document.getElementById('answerStatus');
    const answer = document.getElementById('answer');

    function setStatus(el, cls, message) {
      el.className = cls;
      el.textContent = message;
    }

    async function postJson(url, payload) {
      return fetch(url, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(payload)
      });
    }

    document.getElementById('fileInput').addEventListener('change', async (event) => {
      const file = event.target.files[0];
      if (!file) return;
      const formData = new FormData();
      formData.append('file', file);
      setStatus(uploadStatus, '', 'Processing file...');
      const res = await fetch('/api/files', { method: 'POST', body: formData });
      const json = await res.json();
      if (!res.ok) {
        setStatus(uploadStatus, 'error', json.error || 'Could not read file.');
        return;
      }
      extractedText = json.text;
      document.getElementById('preview').textContent = json.preview;
      document.getElementById('notesCard').classList.remove('hidden');
      document.getElementById('askCard').classList.remove('hidden');
      setStatus(uploadStatus, 'success', '✅ File processed successfully! (' + json.characters + ' characters)');
    });

    document.getElementById('downloadBtn').addEventListener('click', async () => {
      const res = await postJson('/api/export/text', { text: extractedText });
      const blob = await res.blob();
      const link = document.createElement('a');
      link.href = URL.createObjectURL(blob);
      link.download = 'extracted_notes.txt';
      link.click();
      URL.revokeObjectURL(link.href);
    });

    document.getElementById('printBtn').addEventListener('click', async () => {
      const res = await postJson('/api/export/print', { text: extractedText });
      const html = await res.text();
      const url = URL.createObjectURL(new Blob([html], { type: 'text/html' }));
      window.open(url, '_blank');
    });

    document.getElementById('askBtn').addEventListener('click', async () => {
      const payload = {
        text: extractedText,
        question: document.getElementById('question').value,
        marks: Number(document.getElementById('marks').value)
      };
      answer.textContent = '';
      setStatus(answerStatus, '', 'Generating answer...');
      const res = await postJson('/api/ask', payload);
      const json = await res.json();
      if (json.status === 'answer') {
        setStatus(answerStatus, '', '');
        answer.textContent = json.message;
      } else if (json.status === 'warning' || json.status === 'error') {
        setStatus(answerStatus, json.status, json.message);
      } else {
        setStatus(answerStatus, 'error', json.error || 'Request failed.');
      }
    });
  </script>
</body>
</html>"#)
}
