//! Main render/view function (View in TEA pattern)


use microdesigner_app::{AppState, UiMode};
use microdesigner_core::TOOLBOX_ENTRIES;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::hit_regions::{HitRegions, ModalRegions};
use crate::layout;
use crate::theme::{icons::IconSet, palette};
use crate::widgets::{
    card_area, Canvas, CommandBar, DetailsLayout, Navbar, ServiceDetails, Toolbox,
};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`. Returns where each clickable element was
/// drawn so mouse input can be resolved against this frame.
pub fn view(frame: &mut Frame, state: &AppState) -> HitRegions {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(Navbar::new(icons), areas.navbar);
    frame.render_widget(
        CommandBar::new(
            &state.command_input,
            state.ui_mode == UiMode::CommandInput,
        ),
        areas.command_bar,
    );
    frame.render_widget(Toolbox::new(&TOOLBOX_ENTRIES, icons), areas.toolbox);
    frame.render_widget(Canvas::new(state, icons), areas.canvas);

    let command_field = CommandBar::input_area(areas.command_bar);
    let mut regions = HitRegions {
        cards: state
            .catalog()
            .iter()
            .filter_map(|service| {
                card_area(areas.canvas, &service.id).map(|rect| (service.id.clone(), rect))
            })
            .collect(),
        sign_in: Navbar::sign_in_area(areas.navbar),
        send: CommandBar::send_area(areas.command_bar),
        command_field: (!command_field.is_empty()).then_some(command_field),
        modal: None,
    };

    // Modal over everything else
    if let Some(service) = state.selected_service() {
        frame.render_widget(
            ServiceDetails::new(service).focused_action(state.focused_action),
            area,
        );

        let details = DetailsLayout::compute(area, service);
        regions.modal = Some(ModalRegions {
            area: details.modal,
            close: details.close_button,
            actions: details.actions,
        });
    }

    regions
}
