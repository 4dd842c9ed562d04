//! HTML pages.
//!
//! Every page shares one layout. Player names and catalog words are escaped
//! before they are interpolated.

use imp_core::{GameError, Reveal, Role};

const STYLE: &str = r#"
    :root {
        --bg: linear-gradient(135deg, #0f0c29, #302b63, #24243e);
        --card: rgba(30, 30, 46, 0.85);
        --text: #e0e0ff;
        --impostor: #ff3b30;
        --crew: #4cd964;
        --button: #6a5acd;
        --reveal: #ff9500;
    }
    * { box-sizing: border-box; margin: 0; padding: 0; }
    body {
        font-family: 'Exo 2', sans-serif;
        background: var(--bg);
        background-attachment: fixed;
        color: var(--text);
        line-height: 1.6;
        padding: 20px;
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-align: center;
    }
    h1, h2 { font-family: 'Orbitron', monospace; margin: 16px 0; text-shadow: 0 0 10px rgba(100, 100, 255, 0.6); }
    h1 { font-size: 2.4rem; color: var(--crew); }
    h2 { font-size: 1.8rem; }
    textarea {
        width: 100%;
        height: 160px;
        padding: 16px;
        font-size: 1.1rem;
        border: 2px solid #5a5a8e;
        border-radius: 14px;
        background: rgba(20, 20, 35, 0.9);
        color: #ffffff;
        margin: 16px 0;
        resize: vertical;
    }
    button {
        width: 100%;
        padding: 16px;
        font-size: 1.25rem;
        font-weight: bold;
        font-family: 'Orbitron', monospace;
        border: none;
        border-radius: 14px;
        cursor: pointer;
        margin: 12px 0;
        letter-spacing: 1px;
    }
    button:active { transform: scale(0.97); }
    .btn-primary { background: var(--button); color: white; }
    .btn-reveal { background: var(--reveal); color: #000; }
    .btn-impostor { background: var(--impostor); color: white; }
    .card {
        background: var(--card);
        padding: 24px;
        border-radius: 20px;
        margin: 20px 0;
        box-shadow: 0 8px 30px rgba(0, 0, 0, 0.5);
        border: 1px solid rgba(100, 100, 255, 0.2);
    }
    .player-name {
        font-family: 'Orbitron', monospace;
        font-size: 3.6rem;
        font-weight: 700;
        color: var(--impostor);
        margin: 20px 0;
    }
    #role {
        font-size: 1.5rem;
        margin: 24px 0;
        padding: 18px;
        background: rgba(0, 0, 0, 0.3);
        border-radius: 14px;
        display: none;
        border-left: 4px solid var(--crew);
    }
"#;

/// Escape text for use in HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn layout(content: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str("  <title>El Impostor</title>\n");
    html.push_str("  <link href=\"https://fonts.googleapis.com/css2?family=Orbitron:wght@500;700&family=Exo+2:wght@400;600&display=swap\" rel=\"stylesheet\">\n");
    html.push_str("  <style>");
    html.push_str(STYLE);
    html.push_str("  </style>\n</head>\n<body>\n<div class=\"container\">\n");
    html.push_str(content);
    html.push_str("\n</div>\n</body>\n</html>\n");
    html
}

/// Entry screen: the player list form.
pub fn setup() -> String {
    layout(
        r#"<h1>IMPOSTOR</h1>
<div class="card">
  <p>Introduce los nombres de los participantes (uno por línea):</p>
  <form method="post" action="/setup">
    <textarea name="players" placeholder="Aitor&#10;Jon&#10;Mikel&#10;..."></textarea><br>
    <button type="submit" class="btn-primary">¡Empezar partida!</button>
  </form>
</div>"#,
    )
}

/// Validation failure, with a way back to the entry screen.
pub fn error(err: &GameError) -> String {
    let message = match err {
        GameError::NotEnoughPlayers { required, .. } => {
            format!("Se necesitan al menos {required} jugadores.")
        }
    };
    layout(&format!(
        r#"<h1>⚠️ Error</h1>
<div class="card">
  <p>{}</p>
  <a href="/" style="display: block; margin-top: 16px; text-decoration: none;">
    <button class="btn-primary">← Volver</button>
  </a>
</div>"#,
        escape(&message)
    ))
}

/// One player's card, hidden until they tap "Desvelar rol".
///
/// Hiding is client-side only: the role is already in the page.
pub fn role(player: &str, role: &Role) -> String {
    let secret = match role {
        Role::Crew { word } => {
            format!("Tu palabra secreta es: <strong>{}</strong>", escape(word))
        }
        Role::Impostor { clue } => format!(
            "¡Eres el <strong>IMPOSTOR</strong>! Tu pista es: <strong>{}</strong>",
            escape(clue)
        ),
    };

    layout(&format!(
        r#"<div class="player-name">{}</div>
<div id="role">{secret}</div>
<button id="reveal" class="btn-reveal" onclick="revealRole()">👁️ Desvelar rol</button>
<form method="post" action="/next" style="display:none;" id="nextForm">
  <button type="submit" class="btn-primary">✅ Rol visto</button>
</form>
<script>
  function revealRole() {{
    document.getElementById('role').style.display = 'block';
    document.getElementById('reveal').style.display = 'none';
    document.getElementById('nextForm').style.display = 'block';
  }}
</script>"#,
        escape(player)
    ))
}

/// Everyone has looked: announce who starts.
pub fn all_ready(starter: &str) -> String {
    layout(&format!(
        r#"<h1>✅ ¡Todos listos!</h1>
<div class="card">
  <h2>🗣️ <u>{}</u> empieza a hablar.</h2>
  <p>¡Buena suerte a todos!</p>
  <form method="post" action="/reveal_impostor">
    <button type="submit" class="btn-impostor">👁️‍🗨️ Desvelar impostor</button>
  </form>
</div>"#,
        escape(starter)
    ))
}

/// Final screen with the impostor's name.
pub fn reveal(reveal: &Reveal) -> String {
    layout(&format!(
        r#"<h1>🚨 ¡El impostor era...</h1>
<div class="card">
  <h2 style="color: var(--impostor); font-size: 2.5rem;">{}!</h2>
  <p style="margin-top: 20px;">Gracias por jugar.</p>
  <a href="/" style="display: block; margin-top: 20px; text-decoration: none;">
    <button class="btn-primary">↺ Nueva partida</button>
  </a>
</div>"#,
        escape(reveal.name())
    ))
}
