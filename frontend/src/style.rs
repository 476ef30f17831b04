use yew::prelude::*;

pub static BASE_STYLE: &str = r#"
* {
	--gold: #d4af37;
	--deep-green: #2d3a2e;
	--ink: #1a1a1a;
	--cream: #faf8f3;
	--muted: #a89f8c;
	box-sizing: border-box;
	font-family: "Cormorant Garamond", Georgia, serif;
	color: var(--ink);
}
body {
	background-color: var(--cream);
	margin: 0;
}
"#;

pub static FORM_STYLE: &str = r"
#consultation {
	padding: 128px 24px;
}
#consultation-content {
	max-width: 1150px;
	margin: 0 auto;
}
#consultation-card {
	background-color: white;
	border: 1px solid #d4af3733;
	padding: 48px;
}
.form-grid {
	display: grid;
	grid-template-columns: 1fr 1fr;
	gap: 24px;
}
.form-section {
	border-top: 1px solid #d4af3733;
	margin-top: 32px;
	padding-top: 32px;
}
.form-section > h3 {
	color: var(--gold);
	letter-spacing: 0.1em;
	text-transform: uppercase;
}
.field-label {
	display: block;
	color: var(--deep-green);
	letter-spacing: 0.1em;
	text-transform: uppercase;
	margin-bottom: 8px;
}
.form-grid input:not([type=checkbox]), .form-grid select, textarea {
	width: 100%;
	padding: 12px 16px;
	border: 1px solid #d4af374d;
	background-color: white;
}
input:disabled {
	background-color: #f0f0f0;
	opacity: 0.5;
}
textarea {
	resize: none;
}
.checkbox-label {
	display: flex;
	align-items: center;
	gap: 8px;
	margin-top: 8px;
	cursor: pointer;
}
.form-banner {
	padding: 16px;
	margin-bottom: 24px;
}
#form-error {
	background-color: #fef2f2;
	border: 1px solid #fecaca;
	color: #b91c1c;
}
#form-success {
	background-color: #f0fdf4;
	border: 1px solid #bbf7d0;
	color: #15803d;
}
#submit-button {
	width: 100%;
	padding: 16px 48px;
	background: transparent;
	border: 2px solid var(--gold);
	color: var(--gold);
	letter-spacing: 0.1em;
	text-transform: uppercase;
	transition: 0.5s;
}
#submit-button:hover {
	color: var(--ink);
	border-color: var(--ink);
}
#submit-button:disabled {
	opacity: 0.5;
	cursor: not-allowed;
}
";

#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! { <style>{ BASE_STYLE }</style> }
}
