//! Labelled inputs bound to a `FormController`.
//!
//! Entity screens describe each input with a getter/setter pair of plain
//! `fn`s; the binders here turn them into signals and callbacks.

use contracts::shared::entity::EntityResource;
use leptos::prelude::*;

use crate::shared::form_controller::FormController;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    /// Input id, also the error key
    #[prop(into)]
    name: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] disabled: Signal<bool>,
    /// "text" unless given
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let input_id = format!("field-{}", name);
    view! {
        <div class="form__group">
            <label class="form__label" for=input_id.clone()>{label}</label>
            <input
                id=input_id
                class=move || {
                    if error.get().is_some() {
                        "form__input form__input--invalid"
                    } else {
                        "form__input"
                    }
                }
                type=input_type.unwrap_or("text")
                placeholder=placeholder.unwrap_or("")
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group form__group--inline">
            <label class="form__checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || checked.get()
                    prop:disabled=move || disabled.get()
                    on:change=move |ev| on_toggle.run(event_target_checked(&ev))
                />
                <span>{label}</span>
            </label>
        </div>
    }
}

/// `<select>` over `(value, label)` pairs; the empty value means "none"
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    on_change: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__input"
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {move || {
                    let selected = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(v, l)| {
                            let is_selected = v == selected;
                            view! { <option value=v selected=is_selected>{l}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

pub type Getter<E> = fn(&<E as EntityResource>::Form) -> &str;
pub type Setter<E> = fn(&mut <E as EntityResource>::Form, String);

pub fn busy_signal<E: EntityResource>(form: RwSignal<FormController<E>>) -> Signal<bool> {
    Signal::derive(move || form.with(|f| f.is_busy()))
}

pub fn error_signal<E: EntityResource>(
    form: RwSignal<FormController<E>>,
    name: &'static str,
) -> Signal<Option<String>> {
    Signal::derive(move || form.with(|f| f.error(name).map(str::to_string)))
}

pub fn value_signal<E: EntityResource>(
    form: RwSignal<FormController<E>>,
    get: Getter<E>,
) -> Signal<String> {
    Signal::derive(move || form.with(|f| get(f.fields()).to_string()))
}

pub fn setter_callback<E: EntityResource>(
    form: RwSignal<FormController<E>>,
    set: Setter<E>,
) -> Callback<String> {
    Callback::new(move |value: String| form.update(|f| f.edit(|fields| set(fields, value))))
}

/// Text input bound to one form field; `name` is the error key
pub fn text_field<E: EntityResource>(
    form: RwSignal<FormController<E>>,
    label: &'static str,
    name: &'static str,
    get: Getter<E>,
    set: Setter<E>,
) -> AnyView {
    typed_field(form, label, name, "text", get, set)
}

pub fn typed_field<E: EntityResource>(
    form: RwSignal<FormController<E>>,
    label: &'static str,
    name: &'static str,
    input_type: &'static str,
    get: Getter<E>,
    set: Setter<E>,
) -> AnyView {
    view! {
        <TextField
            label=label
            name=name
            input_type=input_type
            value=value_signal(form, get)
            on_input=setter_callback(form, set)
            error=error_signal(form, name)
            disabled=busy_signal(form)
        />
    }
    .into_any()
}

pub fn check_field<E: EntityResource>(
    form: RwSignal<FormController<E>>,
    label: &'static str,
    get: fn(&E::Form) -> bool,
    set: fn(&mut E::Form, bool),
) -> AnyView {
    view! {
        <CheckboxField
            label=label
            checked=Signal::derive(move || form.with(|f| get(f.fields())))
            on_toggle=Callback::new(move |checked: bool| form.update(|f| f.edit(|fields| set(fields, checked))))
            disabled=busy_signal(form)
        />
    }
    .into_any()
}
