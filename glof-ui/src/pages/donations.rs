use crate::components::primitives::{Badge, Glyph, Meter};
use glof_content::donations::{
    Campaign, CampaignCategory, CampaignFilter, DonationForm, CAMPAIGNS, IMPACT_STATS,
    QUICK_AMOUNTS,
};
use glof_shell::presentation::{button_class, Icon, Size, Variant};
use glof_shell::Unwired;
use leptos::*;
use tracing::warn;

#[component]
pub fn DonationsPage() -> impl IntoView {
    let form = create_rw_signal(DonationForm::default());
    let filter = create_rw_signal(CampaignFilter::default());
    let target = create_rw_signal(CAMPAIGNS[0]);
    let notice = create_rw_signal(None::<String>);

    let submit = move |_: ev::MouseEvent| {
        let campaign = target.get_untracked();
        let result = form.with_untracked(|f| f.submit(&Unwired, &campaign));
        match result {
            Ok(()) => notice.set(Some(format!("Thank you for supporting {}.", campaign.title))),
            Err(err) => {
                warn!(%err, campaign = campaign.title, "donation not processed");
                notice.set(Some(format!("Donation could not be processed: {err}")));
            }
        }
    };

    let filter_button = move |category: Option<CampaignCategory>| {
        let label = category.map_or("All Campaigns", |c| c.label());
        let class = move || {
            let selected = filter.with(|f| f.category == category);
            button_class(Variant::selected_or(selected, Variant::Outline), Size::Sm)
        };
        view! {
          <button class=class on:click=move |_| filter.update(|f| f.category = category)>
            {label}
          </button>
        }
    };

    let campaign_card = move |campaign: Campaign| {
        let progress = campaign.progress_percent();
        let fraction = progress / 100.0;
        let chosen = move || target.with(|t| t.title == campaign.title);
        view! {
          <div class="card campaign">
            <div class="row">
              <span class="emblem">{campaign.emblem}</span>
              <Badge tone=campaign.urgency.tone()>{campaign.urgency.label()}</Badge>
              <span class="meta"><Glyph icon=campaign.category.icon() />{campaign.category.label()}</span>
            </div>
            <h3>{campaign.title}</h3>
            <p>{campaign.description}</p>
            <div class="meta"><Glyph icon=Icon::MapPin />{campaign.location}</div>
            <Meter fraction=fraction />
            <div class="row meta">
              <span>{format!("${} raised of ${}", campaign.raised, campaign.target)}</span>
              <span>{format!("{progress:.0}%")}</span>
            </div>
            <div class="row meta">
              <span><Glyph icon=Icon::Users />{format!("{} donors", campaign.donors)}</span>
              <span><Glyph icon=Icon::Clock />{format!("{} days left", campaign.days_left)}</span>
              <span><Glyph icon=Icon::Heart />{format!("{} beneficiaries", campaign.beneficiaries)}</span>
            </div>
            <button
              class=move || button_class(Variant::selected_or(chosen(), Variant::Outline), Size::Md)
              on:click=move |_| target.set(campaign)
            >
              "Support this campaign"
            </button>
          </div>
        }
    };

    let campaigns = move || {
        filter.with(|f| {
            f.apply(&CAMPAIGNS)
                .into_iter()
                .copied()
                .map(campaign_card)
                .collect_view()
        })
    };

    view! {
      <section class="panel">
        <h1>"Support & Donations"</h1>
        <div class="grid">
          {IMPACT_STATS
            .into_iter()
            .map(|stat| view! {
              <div class="card stat">
                <Glyph icon=stat.icon />
                <div class="stat-value">{stat.value}</div>
                <div class="meta">{stat.label}</div>
              </div>
            })
            .collect_view()}
        </div>
      </section>

      <section class="panel">
        <h2><Glyph icon=Icon::DollarSign />"Quick Donate"</h2>
        <div class="row">
          {QUICK_AMOUNTS
            .into_iter()
            .map(|amount| {
                let class = move || {
                    let selected = form.with(|f| f.is_selected(amount));
                    button_class(Variant::selected_or(selected, Variant::Outline), Size::Sm)
                };
                view! {
                  <button class=class on:click=move |_| form.update(|f| f.select(amount))>
                    {format!("${amount}")}
                  </button>
                }
            })
            .collect_view()}
        </div>
        <input
          type="number"
          min="1"
          placeholder="Custom amount"
          on:input=move |ev| form.update(|f| f.set_custom(&event_target_value(&ev)))
        />
        <p class="meta">{move || format!("Supporting: {}", target.with(|t| t.title))}</p>
        <button class=button_class(Variant::Hero, Size::Lg) on:click=submit>
          <Glyph icon=Icon::Heart />
          {move || format!("Donate ${}", form.with(DonationForm::amount))}
        </button>
        <Show when=move || notice.with(Option::is_some)>
          <p class="notice">{move || notice.get().unwrap_or_default()}</p>
        </Show>
      </section>

      <section class="panel">
        <div class="row">
          {filter_button(None)}
          {CampaignCategory::FILTERS.into_iter().map(|c| filter_button(Some(c))).collect_view()}
        </div>
        <div class="grid">{campaigns}</div>
      </section>
    }
}
