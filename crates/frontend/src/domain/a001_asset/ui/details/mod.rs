use contracts::domain::a001_asset::AssetResource;
use contracts::domain::a002_category::{Category, CategoryResource};
use contracts::domain::a004_supplier::{Supplier, SupplierResource};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use crate::layout::global_context::EntityKind;
use crate::shared::api::gloo::upload_image;
use crate::shared::components::entity_form::{entity_form, reference_options, FormOptions};
use crate::shared::components::form_field::{
    busy_signal, check_field, setter_callback, text_field, typed_field, value_signal,
    SelectField,
};
use crate::shared::form_controller::FormController;

const STATUS_OPTIONS: [(&str, &str); 3] = [
    ("active", "Active"),
    ("maintenance", "Maintenance"),
    ("retired", "Retired"),
];

fn status_options() -> Vec<(String, String)> {
    STATUS_OPTIONS
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

fn category_option(c: &Category) -> (String, String) {
    (c.id.clone(), c.name.clone())
}

fn supplier_option(s: &Supplier) -> (String, String) {
    (s.id.clone(), s.name.clone())
}

#[component]
fn ImagePicker(form: RwSignal<FormController<AssetResource>>) -> impl IntoView {
    let uploading = RwSignal::new(false);
    let upload_error = RwSignal::new(None::<String>);
    let busy = busy_signal(form);
    let image_url = Signal::derive(move || form.with(|f| f.fields().image_url.clone()));

    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        uploading.set(true);
        upload_error.set(None);
        spawn_local(async move {
            match upload_image(&file).await {
                Ok(url) => form.update(|f| f.edit(|fields| fields.image_url = url)),
                Err(err) => {
                    log::warn!("image upload: {}", err);
                    upload_error.set(Some("Image upload failed.".to_string()));
                }
            }
            uploading.set(false);
        });
    };

    view! {
        <div class="form__group">
            <label class="form__label" for="field-image">"Image"</label>
            <input
                id="field-image"
                class="form__input"
                type="file"
                accept="image/*"
                prop:disabled=move || busy.get() || uploading.get()
                on:change=on_change
            />
            {move || uploading.get().then(|| view! { <span class="form__hint">"Uploading..."</span> })}
            {move || upload_error.get().map(|e| view! { <span class="form__error">{e}</span> })}
            {move || {
                let url = image_url.get();
                (!url.is_empty())
                    .then(|| view! { <img class="form__image-preview" src=url alt="Asset image" /> })
            }}
        </div>
    }
}

fn asset_fields(form: RwSignal<FormController<AssetResource>>) -> AnyView {
    let busy = busy_signal(form);
    let has_warranty = Signal::derive(move || form.with(|f| f.fields().have_warranty));
    let categories = reference_options::<CategoryResource>(category_option);
    let suppliers = reference_options::<SupplierResource>(supplier_option);

    view! {
        <div class="form__grid">
            {text_field(form, "Asset Name", "name", |f| f.name.as_str(), |f, v| f.name = v)}
            {text_field(
                form,
                "Serial Number",
                "serialNumber",
                |f| f.serial_number.as_str(),
                |f, v| f.serial_number = v,
            )}
            {text_field(form, "Owner", "owner", |f| f.owner.as_str(), |f, v| f.owner = v)}
            <SelectField
                label="Status"
                value=value_signal(form, |f| f.status.as_str())
                options=status_options()
                on_change=setter_callback(form, |f, v| f.status = v)
                disabled=busy
                placeholder="Select status"
            />
            <SelectField
                label="Category"
                value=value_signal(form, |f| f.category_id.as_str())
                options=categories
                on_change=setter_callback(form, |f, v| f.category_id = v)
                disabled=busy
                placeholder="Select category"
            />
            <SelectField
                label="Supplier"
                value=value_signal(form, |f| f.supplier_id.as_str())
                options=suppliers
                on_change=setter_callback(form, |f, v| f.supplier_id = v)
                disabled=busy
                placeholder="Select supplier"
            />
            {text_field(form, "Location", "location", |f| f.location.as_str(), |f, v| f.location = v)}
            {check_field(form, "Has Warranty", |f| f.have_warranty, |f, v| f.have_warranty = v)}
            <Show when=move || has_warranty.get()>
                {typed_field(
                    form,
                    "Warranty Start Date",
                    "warrantyStartDate",
                    "date",
                    |f| f.warranty_start_date.as_str(),
                    |f, v| f.warranty_start_date = v,
                )}
                {typed_field(
                    form,
                    "Warranty End Date",
                    "warrantyEndDate",
                    "date",
                    |f| f.warranty_end_date.as_str(),
                    |f, v| f.warranty_end_date = v,
                )}
            </Show>
            {check_field(form, "Active", |f| f.active, |f, v| f.active = v)}
            <ImagePicker form=form />
        </div>
    }
    .into_any()
}

#[component]
pub fn AssetDetails(id: Option<String>) -> impl IntoView {
    entity_form::<AssetResource>(
        id,
        FormOptions {
            kind: EntityKind::Asset,
            create_title: "Add Asset",
            edit_title: "Edit Asset",
            create_label: "Add Asset",
            edit_label: "Update Asset",
        },
        asset_fields,
    )
}
