//! Page section rendering.
//!
//! Draws the five sections top to bottom inside the page scroll area. Each
//! section records its rect into the [`MeasuredSectionRegistry`] and carries
//! out a parked scroll request when it is the target.

use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontId, RichText, Shape};
use folio::domain::particles::Particle;
use folio::{PortfolioContent, Project, ScrollBehavior, Section, ThemeColors};

use crate::app::ContactForm;
use crate::presentation::styling;
use crate::ui::layout;
use crate::ui::section_registry::MeasuredSectionRegistry;

/// Result of user interaction inside the page
pub enum SectionInteraction {
    /// A call-to-action asked to jump to a section
    Navigate(Section),
    /// The contact form's send button was clicked
    ContactSubmitted,
}

/// Everything the page needs for one frame.
pub struct PageContext<'a> {
    pub content: &'a PortfolioContent,
    pub colors: ThemeColors,
    pub particles: &'a [Particle],
    pub registry: &'a mut MeasuredSectionRegistry,
    pub contact_form: &'a mut ContactForm,
    /// Height of the visible scroll viewport
    pub viewport_height: f32,
    /// Width of the window, for breakpoints
    pub window_width: f32,
}

/// Renders every section and the footer.
pub fn render_page(ui: &mut egui::Ui, page: &mut PageContext<'_>) -> Option<SectionInteraction> {
    let mut interaction = None;
    // Sections abut so the viewport midpoint always lands in one of them
    ui.spacing_mut().item_spacing.y = 0.0;

    if let Some(i) = render_home(ui, page) {
        interaction = Some(i);
    }
    render_about(ui, page);
    render_skills(ui, page);
    render_projects(ui, page);
    if let Some(i) = render_contact(ui, page) {
        interaction = Some(i);
    }
    render_footer(ui, page);

    interaction
}

/// Records a section's rect and scrolls to it if it is the pending target.
fn finish_section(ui: &egui::Ui, section: Section, rect: egui::Rect, registry: &mut MeasuredSectionRegistry) {
    registry.record(section, rect);
    match registry.take_pending_scroll(section) {
        Some(ScrollBehavior::Smooth) => ui.scroll_to_rect(rect, Some(egui::Align::TOP)),
        Some(ScrollBehavior::Instant) => ui.scroll_to_rect_animation(
            rect,
            Some(egui::Align::TOP),
            egui::style::ScrollAnimation::none(),
        ),
        None => {}
    }
}

/// Draws a standard section: full-width frame with centered content.
fn render_section<R>(
    ui: &mut egui::Ui,
    section: Section,
    page: &mut PageContext<'_>,
    add_contents: impl FnOnce(&mut egui::Ui, &mut PageContext<'_>) -> R,
) -> R {
    let colors = page.colors;
    let inner = styling::section_frame(section, &colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.spacing_mut().item_spacing.y = 8.0;
        ui.vertical_centered(|ui| {
            ui.set_max_width(layout::CONTENT_MAX_WIDTH);
            add_contents(ui, page)
        })
        .inner
    });
    finish_section(ui, section, inner.response.rect, page.registry);
    inner.inner
}

fn render_home(ui: &mut egui::Ui, page: &mut PageContext<'_>) -> Option<SectionInteraction> {
    let colors = page.colors;
    let min_height = (page.viewport_height - 160.0).max(0.0);

    let inner = styling::section_frame(Section::Home, &colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.set_min_height(min_height);
        let backdrop = ui.painter().add(Shape::Noop);

        let mut clicked = false;
        ui.vertical_centered(|ui| {
            ui.add_space((min_height / 2.0 - 140.0).max(0.0));
            let hero = egui::Frame::new()
                .fill(folio::with_alpha(colors.surface, 180))
                .corner_radius(egui::CornerRadius::same(12))
                .inner_margin(egui::Margin::same(32));
            hero.show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 16.0;
                ui.label(greeting(&page.content.owner, &colors));
                ui.label(
                    RichText::new(&page.content.headline)
                        .size(26.0)
                        .color(colors.text),
                );
                clicked = ui.add(styling::accent_button("View My Work", &colors)).clicked();
            });
        });

        let rect = ui.max_rect();
        let time = ui.input(|i| i.time) as f32;
        ui.painter().set(
            backdrop,
            Shape::Vec(particle_shapes(page.particles, rect, time, colors.accent)),
        );
        if ui.is_rect_visible(rect) {
            ui.ctx().request_repaint();
        }
        clicked
    });

    finish_section(ui, Section::Home, inner.response.rect, page.registry);
    inner.inner.then_some(SectionInteraction::Navigate(Section::Projects))
}

fn greeting(owner: &str, colors: &ThemeColors) -> LayoutJob {
    let font = FontId::proportional(styling::HERO_SIZE);
    let mut job = LayoutJob::default();
    job.append(
        "Hello, I'm ",
        0.0,
        TextFormat::simple(font.clone(), colors.text_strong),
    );
    job.append(owner, 0.0, TextFormat::simple(font, colors.accent));
    job
}

fn particle_shapes(particles: &[Particle], rect: egui::Rect, time: f32, color: Color32) -> Vec<Shape> {
    particles
        .iter()
        .filter_map(|particle| {
            let frame = particle.frame_at(time);
            if frame.opacity <= 0.0 {
                return None;
            }
            let center = egui::pos2(
                rect.left() + particle.x * rect.width() + frame.dx,
                rect.top() + particle.y * rect.height() + frame.dy,
            );
            Some(Shape::circle_filled(
                center,
                particle.size / 2.0,
                color.gamma_multiply(frame.opacity),
            ))
        })
        .collect()
}

fn render_about(ui: &mut egui::Ui, page: &mut PageContext<'_>) {
    render_section(ui, Section::About, page, |ui, page| {
        let colors = page.colors;
        ui.label(styling::section_heading("About Me", &colors));
        ui.add_space(24.0);
        for paragraph in &page.content.about {
            ui.label(styling::body_text(paragraph, &colors));
            ui.add_space(16.0);
        }
    });
}

fn render_skills(ui: &mut egui::Ui, page: &mut PageContext<'_>) {
    let columns = layout::grid_columns(page.window_width, [2, 3, 4]);
    render_section(ui, Section::Skills, page, |ui, page| {
        let colors = page.colors;
        let on = styling::section_fill(Section::Skills, &colors);
        ui.label(styling::section_heading("Skills", &colors));
        ui.add_space(24.0);

        for row in page.content.skills.chunks(columns) {
            ui.columns(columns, |cols| {
                for (col, skill) in cols.iter_mut().zip(row) {
                    styling::card_frame(on, &colors).show(col, |ui| {
                        ui.set_width(ui.available_width());
                        ui.vertical_centered(|ui| {
                            ui.label(styling::title_text(skill, 22.0, &colors));
                        });
                    });
                }
            });
            ui.add_space(16.0);
        }
    });
}

fn render_projects(ui: &mut egui::Ui, page: &mut PageContext<'_>) {
    let columns = layout::grid_columns(page.window_width, [1, 2, 3]);
    render_section(ui, Section::Projects, page, |ui, page| {
        let colors = page.colors;
        let on = styling::section_fill(Section::Projects, &colors);
        ui.label(styling::section_heading("Projects", &colors));
        ui.add_space(24.0);

        for row in page.content.projects.chunks(columns) {
            ui.columns(columns, |cols| {
                for (col, project) in cols.iter_mut().zip(row) {
                    styling::card_frame(on, &colors).show(col, |ui| {
                        ui.set_width(ui.available_width());
                        project_card(ui, project, &colors);
                    });
                }
            });
            ui.add_space(24.0);
        }
    });
}

fn project_card(ui: &mut egui::Ui, project: &Project, colors: &ThemeColors) {
    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = 10.0;
        ui.label(styling::title_text(&project.title, 28.0, colors));
        ui.label(RichText::new(&project.year).size(20.0).italics().color(colors.text_strong));
        ui.label(RichText::new(&project.description).size(15.0).color(colors.text_dim));
        ui.hyperlink_to(RichText::new("View Project").strong(), &project.url);
    });
}

fn render_contact(ui: &mut egui::Ui, page: &mut PageContext<'_>) -> Option<SectionInteraction> {
    let submitted = render_section(ui, Section::Contact, page, |ui, page| {
        let colors = page.colors;
        let content = page.content;
        let contact = &content.contact;
        let on = styling::section_fill(Section::Contact, &colors);

        ui.label(styling::section_heading(&contact.heading, &colors));
        ui.add_space(16.0);
        ui.label(styling::body_text(&contact.intro, &colors).size(20.0));
        ui.add_space(24.0);

        let mut submitted = false;
        ui.scope(|ui| {
            ui.set_max_width(560.0);
            styling::card_frame(on, &colors).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.spacing_mut().item_spacing.y = 16.0;
                let form = &mut *page.contact_form;
                ui.add(
                    egui::TextEdit::singleline(&mut form.name)
                        .hint_text("Your Name")
                        .desired_width(f32::INFINITY),
                );
                ui.add(
                    egui::TextEdit::singleline(&mut form.email)
                        .hint_text("Your Email")
                        .desired_width(f32::INFINITY),
                );
                ui.add(
                    egui::TextEdit::multiline(&mut form.message)
                        .hint_text("Your Message")
                        .desired_rows(6)
                        .desired_width(f32::INFINITY),
                );
                submitted = ui
                    .add_sized(
                        [ui.available_width(), 40.0],
                        styling::accent_button("Send Message", &colors),
                    )
                    .clicked();
            });
        });

        ui.add_space(32.0);
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Email:").color(colors.text_dim));
            ui.hyperlink_to(contact.email.as_str(), format!("mailto:{}", contact.email));
        });
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("LinkedIn:").color(colors.text_dim));
            ui.hyperlink_to(contact.linkedin_label.as_str(), &contact.linkedin_url);
        });
        submitted
    });

    submitted.then_some(SectionInteraction::ContactSubmitted)
}

fn render_footer(ui: &mut egui::Ui, page: &PageContext<'_>) {
    egui::Frame::new()
        .fill(styling::card_fill(page.colors.surface, &page.colors))
        .inner_margin(egui::Margin::symmetric(16, 32))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(page.content.footer_text())
                        .size(13.0)
                        .color(page.colors.text_dim),
                );
            });
        });
}
