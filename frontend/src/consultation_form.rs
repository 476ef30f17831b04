use consultation_data::{
	BudgetRange,
	ConsultationForm,
	ConsultationSink,
	ContactMethod,
	EventType,
	Field,
	FieldValue,
	GuestCount,
	Service,
	SubmitOutcome
};
use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
	Event,
	HtmlInputElement,
	HtmlSelectElement,
	HtmlTextAreaElement,
	InputEvent,
	SubmitEvent
};
use yew::prelude::*;

use crate::{style::FORM_STYLE, supabase::SupabaseSink};

// Turns a change event from any of the form's inputs into the name of the input and its new value
fn field_change(e: &Event) -> Option<(String, FieldValue)> {
	let target = e.target()?;

	if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
		let value = if input.type_() == "checkbox" {
			FieldValue::Checked(input.checked())
		} else {
			FieldValue::Text(input.value())
		};
		return Some((input.name(), value));
	}

	if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
		return Some((select.name(), FieldValue::Text(select.value())));
	}

	target.dyn_ref::<HtmlTextAreaElement>()
		.map(|area| (area.name(), FieldValue::Text(area.value())))
}

macro_rules! select_options{
	($opts:ty, $current:expr) => {
		<$opts>::ALL.iter().map(|opt| html! {
			<option value={ opt.as_str() } selected={ *opt == $current }>{ opt.label() }</option>
		}).collect::<Html>()
	}
}

#[function_component(ConsultationSection)]
pub fn consultation_section() -> Html {
	html! {
		<section id="consultation">
			<style>{ FORM_STYLE }</style>
			<div id="consultation-content">
				<h2>{ "Begin Your" }<br /><em>{ "Journey" }</em></h2>
				<p>
					{ "We'd love to hear about your vision. Share the details of your celebration, \
					and let's discuss how we can bring your dream event to life with elegance and precision." }
				</p>
				<div id="consultation-card">
					<ConsultationFormView />
				</div>
			</div>
		</section>
	}
}

#[function_component(ConsultationFormView)]
pub fn consultation_form_view() -> Html {
	// This lives in a RefCell instead of a reducer so that the submit handler can check and set
	// `loading` in one go, before anything can re-render
	let form = use_mut_ref(ConsultationForm::new);
	let redraw = use_force_update();
	// The banner timers are owned by the component, so if the form goes away before they fire,
	// dropping them cancels them
	let banner_timers = use_mut_ref(Vec::<Timeout>::new);
	let sink = use_state(SupabaseSink::from_build_env);

	let on_field = {
		let form = form.clone();
		let redraw = redraw.clone();
		Callback::from(move |e: Event| {
			let Some((name, value)) = field_change(&e) else {
				log!("Got a change event from something that isn't a form input");
				return;
			};

			let res = name.parse::<Field>()
				.and_then(|field| form.borrow_mut().set_field(field, value));

			match res {
				Ok(()) => redraw.force_update(),
				Err(e) => log!(format!("Ignoring change to '{name}': {e}")),
			}
		})
	};
	let on_text = on_field.reform(|e: InputEvent| Event::from(e));

	let on_other_detail = {
		let form = form.clone();
		let redraw = redraw.clone();
		Callback::from(move |e: InputEvent| if let Some(input) = e.target()
			.and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
				form.borrow_mut().set_other_services_detail(input.value());
				redraw.force_update();
			}
		)
	};

	let on_submit = {
		let form = form.clone();
		let redraw = redraw.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();

			let row = match form.borrow_mut().begin_submit() {
				Ok(row) => row,
				Err(err) => {
					log!(format!("Not submitting: {err}"));
					return;
				}
			};
			redraw.force_update();

			let form = form.clone();
			let redraw = redraw.clone();
			let timers = banner_timers.clone();
			let sink = (*sink).clone();

			wasm_bindgen_futures::spawn_local(async move {
				let result = sink.insert(&row).await;
				let outcome = form.borrow_mut().finish_submit(result);
				redraw.force_update();

				if let SubmitOutcome::Submitted { dismiss_after } = outcome {
					let millis = u32::try_from(dismiss_after.as_millis()).unwrap_or(u32::MAX);
					let timeout = Timeout::new(millis, move || {
						form.borrow_mut().dismiss_banner();
						redraw.force_update();
					});
					timers.borrow_mut().push(timeout);
				}
			});
		})
	};

	let state = form.borrow();
	let req = state.request();
	let status = state.status();

	let services = Service::ALL.iter().map(|service| {
		let service = *service;
		let form = form.clone();
		let redraw = redraw.clone();
		let onchange = Callback::from(move |_: Event| {
			form.borrow_mut().toggle_service(service);
			redraw.force_update();
		});

		html! {
			<label class="checkbox-label">
				<input type="checkbox" checked={ req.has_service(service) } onchange={ onchange } />
				<span>{ service.label() }</span>
			</label>
		}
	}).collect::<Html>();

	let event_date = req.event_date
		.map(|d| d.to_string())
		.unwrap_or_default();

	html! {
		<form onsubmit={ on_submit }>
			{ match status.error_message() {
				Some(err) => html! { <div class="form-banner" id="form-error">{ err }</div> },
				None => html! {}
			}}

			if status.submitted() {
				<div class="form-banner" id="form-success">
					{ "Thank you for your consultation request. We will be in touch shortly!" }
				</div>
			}

			<div class="form-grid">
				<div>
					<label class="field-label">{ "Full Name *" }</label>
					<input
						type="text"
						name={ Field::FullName.name() }
						value={ req.full_name.clone() }
						oninput={ on_text.clone() }
						placeholder="Your full name"
						required=true
					/>
				</div>
				<div>
					<label class="field-label">{ "Phone Number *" }</label>
					<input
						type="tel"
						name={ Field::PhoneNumber.name() }
						value={ req.phone_number.clone() }
						oninput={ on_text.clone() }
						placeholder="Your phone number"
						required=true
					/>
				</div>
				<div>
					<label class="field-label">{ "Email Address *" }</label>
					<input
						type="email"
						name={ Field::Email.name() }
						value={ req.email.clone() }
						oninput={ on_text.clone() }
						placeholder="your@email.com"
						required=true
					/>
				</div>
				<div>
					<label class="field-label">{ "Preferred Contact Method *" }</label>
					<select name={ Field::ContactMethod.name() } onchange={ on_field.clone() }>
						{ select_options!(ContactMethod, req.contact_method) }
					</select>
				</div>
			</div>

			<div class="form-section">
				<h3>{ "Event Details" }</h3>
				<div class="form-grid">
					<div>
						<label class="field-label">{ "Event Type *" }</label>
						<select name={ Field::EventType.name() } onchange={ on_field.clone() }>
							{ select_options!(EventType, req.event_type) }
						</select>
					</div>
					<div>
						<label class="field-label">{ "Event Date" }</label>
						<input
							type="date"
							name={ Field::EventDate.name() }
							value={ event_date }
							onchange={ on_field.clone() }
							disabled={ state.date_input_disabled() }
						/>
						<label class="checkbox-label">
							<input
								type="checkbox"
								name={ Field::DateNotFinal.name() }
								checked={ req.date_not_final }
								onchange={ on_field.clone() }
							/>
							<span>{ "Date not final yet" }</span>
						</label>
					</div>
					<div>
						<label class="field-label">{ "Event Location / Venue" }</label>
						<input
							type="text"
							name={ Field::EventLocation.name() }
							value={ req.event_location.clone() }
							oninput={ on_text.clone() }
							disabled={ state.location_input_disabled() }
							placeholder="Venue name or location"
						/>
						<label class="checkbox-label">
							<input
								type="checkbox"
								name={ Field::VenueNotBooked.name() }
								checked={ req.venue_not_booked }
								onchange={ on_field.clone() }
							/>
							<span>{ "Venue not booked yet" }</span>
						</label>
					</div>
					<div>
						<label class="field-label">{ "Estimated Guest Count *" }</label>
						<select name={ Field::GuestCount.name() } onchange={ on_field.clone() }>
							{ select_options!(GuestCount, req.guest_count) }
						</select>
					</div>
				</div>
			</div>

			<div class="form-section">
				<h3>{ "Services Needed" }</h3>
				<div class="form-grid">{ services }</div>
				if state.shows_other_services_input() {
					<div class="form-grid">
						<input
							type="text"
							value={ state.other_services_detail().to_string() }
							oninput={ on_other_detail }
							placeholder="Please specify other services"
						/>
					</div>
				}
			</div>

			<div class="form-section">
				<h3>{ "Style & Vision" }</h3>
				<div class="form-grid">
					<div>
						<label class="field-label">{ "Theme / Colours / Style" }</label>
						<input
							type="text"
							name={ Field::ThemeAndStyle.name() }
							value={ req.theme_and_style.clone() }
							oninput={ on_text.clone() }
							placeholder="e.g., Elegant gold and black, minimalist chic..."
						/>
					</div>
					<div>
						<label class="field-label">{ "Inspiration Link or Pinterest URL" }</label>
						<input
							type="url"
							name={ Field::InspirationUrl.name() }
							value={ req.inspiration_url.clone() }
							oninput={ on_text.clone() }
							placeholder="https://pinterest.com/..."
						/>
					</div>
				</div>
			</div>

			<div class="form-section">
				<h3>{ "Budget" }</h3>
				<label class="field-label">{ "Estimated Budget Range *" }</label>
				<select name={ Field::BudgetRange.name() } onchange={ on_field.clone() }>
					{ select_options!(BudgetRange, req.budget_range) }
				</select>
			</div>

			<div class="form-section">
				<h3>{ "Additional Notes" }</h3>
				<label class="field-label">{ "Tell us more about your vision" }</label>
				<textarea
					name={ Field::AdditionalNotes.name() }
					value={ req.additional_notes.clone() }
					oninput={ on_text.clone() }
					rows="5"
					placeholder="Share any additional details, preferences, or requirements..."
				/>
			</div>

			<div class="form-section">
				<button type="submit" id="submit-button" disabled={ status.loading() }>
					{ if status.loading() { "Submitting..." } else { "Submit Consultation Request" } }
				</button>
			</div>
		</form>
	}
}
