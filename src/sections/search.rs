use leptos::prelude::*;

use crate::components::{Icon, Reveal};
use crate::models::{Category, FeaturedModel, IconKind, FEATURED_MODELS};
use crate::state::reveal::stagger_delay_ms;
use crate::state::FilterState;

/// Search box and category picker.
///
/// Both inputs only record what was entered; the featured grid below does
/// not read them.
#[component]
pub fn SearchBar(filter: RwSignal<FilterState>) -> impl IntoView {
    view! {
        <Reveal class="search-panel">
            <div class="search-field">
                <Icon kind=IconKind::Search class="search-icon" />
                <input
                    type="text"
                    placeholder="Search models, authors, or tags..."
                    prop:value=move || filter.with(|f| f.search_text.clone())
                    on:input=move |ev| filter.update(|f| f.set_search(event_target_value(&ev)))
                />
            </div>
            <div class="category-field">
                <Icon kind=IconKind::Filter class="filter-icon" />
                <select on:change=move |ev| {
                    match event_target_value(&ev).parse::<Category>() {
                        Ok(category) => filter.update(|f| f.set_category(category)),
                        Err(err) => log::warn!("{err}"),
                    }
                }>
                    {Category::all()
                        .into_iter()
                        .map(|category| {
                            view! {
                                <option
                                    value=category.as_str()
                                    selected=move || filter.with(|f| f.category == category)
                                >
                                    {category.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </Reveal>
    }
}

/// The fixed sample of featured models
#[component]
pub fn FeaturedGrid() -> impl IntoView {
    view! {
        <Reveal class="featured" delay_ms=200>
            <h2 class="section-title">"Featured Models"</h2>
            <div class="model-grid">
                <For
                    each=|| FEATURED_MODELS.iter().enumerate()
                    key=|(_, model)| model.id
                    children=|(index, model)| {
                        view! {
                            <Reveal class="model-card-wrap" delay_ms=stagger_delay_ms(index, 100)>
                                <ModelCard model=*model />
                            </Reveal>
                        }
                    }
                />
            </div>
        </Reveal>
    }
}

#[component]
fn ModelCard(model: FeaturedModel) -> impl IntoView {
    view! {
        <article class="model-card" data-model-id=model.id.to_string()>
            <header class="model-card-header">
                <h3>{model.name}</h3>
                <span class="rating">
                    <Icon kind=IconKind::Star class="icon-sm star" />
                    {model.rating.to_string()}
                </span>
            </header>
            <p class="model-description">{model.description}</p>
            <div class="model-meta">
                <span>"by "{model.author}</span>
                <span>{model.size}</span>
            </div>
            <div class="tag-list">
                {model.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect_view()}
            </div>
            <footer class="model-card-footer">
                <span class="downloads">
                    <Icon kind=IconKind::Download class="icon-sm" />
                    {model.downloads}
                </span>
                <button type="button" class="btn btn-primary btn-sm">"View Model"</button>
            </footer>
        </article>
    }
}
