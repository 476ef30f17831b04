use yew::prelude::*;
use consultation_form::ConsultationSection;
use style::SharedStyle;

mod config;
mod consultation_form;
mod style;
mod supabase;

// Everything else on the page (the hero, testimonials, footer) is static markup served alongside
// this; the only part that needs any state is the consultation form.
#[function_component(Frontend)]
pub fn frontend() -> Html {
	html! {
		<>
			<SharedStyle />
			<ConsultationSection />
		</>
	}
}

fn main() {
	yew::Renderer::<Frontend>::new().render();
}
