use dioxus::prelude::*;
use rafiq_core::Theme;
use crate::content::{self, nav_anchor, ChildSnapshot};
use crate::theme::AppColors;
use crate::widgets::{BrandMark, FeatureCard, GradientBackground, GradientCard, TestimonialCard, ThemeToggle};

const SECTION: &str = "padding: 96px 24px; max-width: 1200px; margin: 0 auto;";
const GRID: &str = "display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 24px;";

#[component]
pub fn LandingScreen(
    theme: Theme,
    on_login: EventHandler<()>,
    on_signup: EventHandler<()>,
) -> Element {
    let mut menu_open = use_signal(|| false);
    let on_surface = AppColors::on_surface(theme);
    let muted = AppColors::muted(theme);
    let card = AppColors::card(theme);
    let border = AppColors::border(theme);
    let gradient = AppColors::BRAND_GRADIENT;
    let pink = AppColors::PINK;

    rsx! {
        GradientBackground { theme,
            header { style: "position: sticky; top: 0; z-index: 40; display: flex; align-items: center; justify-content: space-between; height: 64px; padding: 0 24px; background: {card}; border-bottom: 1px solid {border}; backdrop-filter: blur(12px);",
                BrandMark { size: 40 }
                nav { class: "desktop-nav", style: "display: flex; gap: 24px;",
                    for item in content::NAV_ITEMS {
                        a { key: "{item}", href: nav_anchor(item), style: "font-size: 0.875rem; font-weight: 500; color: {on_surface}; text-decoration: none;", "{item}" }
                    }
                }
                div { style: "display: flex; align-items: center; gap: 12px;",
                    ThemeToggle {}
                    button {
                        onclick: move |_| on_login.call(()),
                        style: "padding: 8px 16px; border-radius: 10px; border: 1px solid {border}; background: transparent; color: {on_surface}; cursor: pointer;",
                        "Log In"
                    }
                    button {
                        onclick: move |_| on_signup.call(()),
                        style: "padding: 8px 16px; border-radius: 10px; border: none; background: {gradient}; color: white; cursor: pointer;",
                        "Get Started"
                    }
                    button {
                        class: "mobile-menu-button",
                        title: "Menu",
                        onclick: move |_| menu_open.set(!menu_open()),
                        style: "border: none; background: transparent; color: {on_surface}; font-size: 1.4rem; cursor: pointer;",
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }
            if menu_open() {
                nav { style: "display: flex; flex-direction: column; gap: 16px; padding: 24px; background: {card}; border-bottom: 1px solid {border};",
                    for item in content::NAV_ITEMS {
                        a {
                            key: "{item}",
                            href: nav_anchor(item),
                            onclick: move |_| menu_open.set(false),
                            style: "font-size: 1.1rem; color: {on_surface}; text-decoration: none;",
                            "{item}"
                        }
                    }
                }
            }

            main {
                section { style: "padding: 128px 24px 96px; text-align: center; max-width: 900px; margin: 0 auto;",
                    span { style: "display: inline-block; padding: 6px 14px; border-radius: 999px; background: rgba(236,72,153,0.12); color: {pink}; font-size: 0.875rem; font-weight: 600;",
                        "✨ {content::HERO_BADGE}"
                    }
                    h1 { style: "font-size: clamp(2.2rem, 5vw, 3.8rem); font-weight: 800; line-height: 1.1; margin: 24px 0;", "{content::HERO_TITLE}" }
                    p { style: "font-size: 1.2rem; color: {muted}; line-height: 1.6; margin-bottom: 40px;", "{content::HERO_SUBTITLE}" }
                    div { style: "display: flex; flex-wrap: wrap; gap: 12px; justify-content: center;",
                        {content::HERO_ACTIONS.into_iter().enumerate().map(|(i, action)| {
                            let look = if i == 0 {
                                format!("border: none; background: {gradient}; color: white;")
                            } else {
                                format!("border: 1px solid {border}; background: transparent; color: {on_surface};")
                            };
                            rsx! {
                                button {
                                    key: "{action}",
                                    onclick: move |_| on_signup.call(()),
                                    style: "padding: 14px 24px; border-radius: 12px; font-weight: 600; cursor: pointer; {look}",
                                    "{action}"
                                }
                            }
                        })}
                    }
                }

                section { id: "features", style: SECTION,
                    SectionHeading { theme, badge: "⚡ Why Rafiq?", title: "We live in the age of distraction",
                        subtitle: "Rafiq is built to bring calm, focus, and progress back into education." }
                    div { style: GRID,
                        for feature in content::WHY_RAFIQ {
                            FeatureCard { key: "{feature.title}", theme, feature }
                        }
                    }
                }

                section { style: SECTION,
                    SectionHeading { theme, badge: "🧠 AI Companion", title: "No more app-hopping",
                        subtitle: "Rafiq's AI explains concepts, finds your best study hours, and even chats with you like a therapist." }
                    div { style: GRID,
                        for feature in content::AI_COMPANION {
                            FeatureCard { key: "{feature.title}", theme, feature }
                        }
                    }
                }

                section { id: "for-teachers", style: SECTION,
                    div { style: GRID,
                        div {
                            SectionHeading { theme, badge: "👥 For Teachers", title: "Simplified. Streamlined. Supercharged.",
                                subtitle: "No need for ChatGPT – it's built in. Focus on teaching while Rafiq handles the rest." }
                            ul { style: "list-style: none; padding: 0;",
                                for point in content::TEACHER_POINTS {
                                    li { key: "{point}", style: "display: flex; gap: 12px; align-items: center; margin-bottom: 12px;",
                                        span { style: "width: 8px; height: 8px; border-radius: 50%; background: {gradient};" }
                                        "{point}"
                                    }
                                }
                            }
                        }
                        GradientCard { theme,
                            h3 { style: "margin: 0 0 4px;", "📈 Teacher Dashboard" }
                            p { style: "margin: 0 0 20px; color: {muted}; font-size: 0.875rem;", "Real-time insights" }
                            for stat in content::TEACHER_STATS {
                                div { key: "{stat.label}", style: "display: flex; justify-content: space-between; padding: 10px 0; border-bottom: 1px solid {border};",
                                    span { style: "color: {muted};", "{stat.label}" }
                                    span { style: "font-weight: 600;", "{stat.value}" }
                                }
                            }
                        }
                    }
                }

                section { id: "for-parents", style: SECTION,
                    SectionHeading { theme, badge: "❤ For Parents – Introducing Family Snaps", title: "You don't need to scroll through reports anymore",
                        subtitle: "Now, your kids appear as beautiful cards. Click to view full analytics and download PDF reports." }
                    div { style: GRID,
                        for child in content::FAMILY_SNAPS {
                            FamilySnapCard { key: "{child.name}", theme, child }
                        }
                    }
                    div { style: "text-align: center; margin-top: 40px;",
                        button { style: "padding: 14px 24px; border-radius: 12px; border: none; background: {gradient}; color: white; font-weight: 600; cursor: pointer;",
                            "Download Sample Report"
                        }
                    }
                }

                section { style: SECTION,
                    SectionHeading { theme, badge: "★ What Our Users Say", title: "Loved by Students, Teachers, and Parents", subtitle: "" }
                    div { style: GRID,
                        for testimonial in content::TESTIMONIALS {
                            TestimonialCard { key: "{testimonial.name}", theme, testimonial }
                        }
                    }
                }

                section { style: "padding: 96px 24px; text-align: center; max-width: 800px; margin: 0 auto;",
                    h2 { style: "font-size: 2.2rem; font-weight: 800;", "We built Rafiq for every student who felt overwhelmed." }
                    p { style: "font-size: 1.2rem; color: {muted};", "For every teacher who felt burned out." }
                    p { style: "font-size: 1.2rem; color: {muted};", "And every parent who didn't know how to help." }
                    p { style: "font-size: 1.4rem; font-weight: 700; margin: 24px 0 40px;", "This is education, made human." }
                    button {
                        onclick: move |_| on_signup.call(()),
                        style: "padding: 16px 32px; border-radius: 14px; border: none; background: {gradient}; color: white; font-size: 1.1rem; font-weight: 600; cursor: pointer;",
                        "Start your journey with Rafiq. Today."
                    }
                }

                ContactSection { theme }
            }

            footer { style: "padding: 64px 24px 32px; border-top: 1px solid {border};",
                div { style: "{GRID} max-width: 1200px; margin: 0 auto;",
                    div {
                        BrandMark { size: 40 }
                        p { style: "color: {muted}; margin-top: 16px;", "Your all-in-one learning companion, built for today's world of distractions." }
                    }
                    for (heading, links) in content::FOOTER_COLUMNS {
                        div { key: "{heading}",
                            h3 { style: "font-size: 1rem; margin: 0 0 16px;", "{heading}" }
                            for link in links {
                                a { key: "{link}", href: "#", style: "display: block; color: {muted}; text-decoration: none; margin-bottom: 8px; font-size: 0.875rem;", "{link}" }
                            }
                        }
                    }
                }
                div { style: "display: flex; justify-content: space-between; align-items: center; max-width: 1200px; margin: 32px auto 0; color: {muted}; font-size: 0.875rem;",
                    p { "© 2025 Rafiq. All rights reserved." }
                    ThemeToggle { show_label: true }
                }
            }
        }
    }
}

#[component]
fn SectionHeading(theme: Theme, badge: &'static str, title: &'static str, subtitle: &'static str) -> Element {
    let muted = AppColors::muted(theme);
    let pink = AppColors::PINK;
    rsx! {
        div { style: "text-align: center; margin-bottom: 48px;",
            span { style: "font-size: 0.875rem; font-weight: 600; color: {pink};", "{badge}" }
            h2 { style: "font-size: clamp(1.8rem, 4vw, 2.8rem); font-weight: 800; margin: 16px 0;", "{title}" }
            if !subtitle.is_empty() {
                p { style: "font-size: 1.1rem; color: {muted}; max-width: 680px; margin: 0 auto;", "{subtitle}" }
            }
        }
    }
}

#[component]
fn FamilySnapCard(theme: Theme, child: ChildSnapshot) -> Element {
    let muted = AppColors::muted(theme);
    let border = AppColors::border(theme);
    let gradient = AppColors::BRAND_GRADIENT;
    let letter = content::initial(child.name);
    rsx! {
        GradientCard { theme,
            div { style: "display: flex; align-items: center; gap: 12px; margin-bottom: 20px;",
                div { style: "width: 48px; height: 48px; border-radius: 14px; background: {gradient}; color: white; font-weight: 700; display: flex; align-items: center; justify-content: center;",
                    "{letter}"
                }
                div {
                    div { style: "font-weight: 700; font-size: 1.1rem;", "{child.name}" }
                    div { style: "color: {muted}; font-size: 0.8rem;", "Grade 8" }
                }
            }
            div { style: "display: flex; justify-content: space-between; font-size: 0.875rem;",
                span { style: "color: {muted};", "Course Progress" }
                span { style: "font-weight: 600;", "{child.progress}%" }
            }
            div { style: "height: 8px; border-radius: 4px; background: {border}; margin: 8px 0 16px; overflow: hidden;",
                div { style: "height: 100%; width: {child.progress}%; background: {gradient};" }
            }
            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px; font-size: 0.875rem;",
                div {
                    p { style: "margin: 0; color: {muted};", "Quiz Average" }
                    p { style: "margin: 0; font-weight: 700;", "{child.average}%" }
                }
                div {
                    p { style: "margin: 0; color: {muted};", "Study Streak" }
                    p { style: "margin: 0; font-weight: 700;", "{child.streak} days" }
                }
            }
            p { style: "margin: 16px 0 0; font-size: 0.8rem; color: {muted};", "Next Quiz: {child.next_quiz}" }
        }
    }
}

/// Static waitlist form; not wired to any backend.
#[component]
fn ContactSection(theme: Theme) -> Element {
    let muted = AppColors::muted(theme);
    let border = AppColors::border(theme);
    let on_surface = AppColors::on_surface(theme);
    let gradient = AppColors::BRAND_GRADIENT;
    let input = format!("width: 100%; padding: 12px; border-radius: 12px; border: 1px solid {border}; background: transparent; color: {on_surface}; box-sizing: border-box; margin: 6px 0 16px;");

    rsx! {
        section { id: "contact", style: SECTION,
            SectionHeading { theme, badge: "✉ Get in Touch", title: "Ready to Transform Education?",
                subtitle: "Join thousands of students, teachers, and parents who are already experiencing the future of learning." }
            div { style: GRID,
                div {
                    GradientCard { theme,
                        h3 { style: "margin: 0 0 4px;", "Email Us" }
                        p { style: "margin: 0; color: {muted};", "{content::CONTACT_EMAIL}" }
                    }
                    GradientCard { theme,
                        h3 { style: "margin: 0 0 4px;", "Call Us" }
                        p { style: "margin: 0; color: {muted};", "{content::CONTACT_PHONE}" }
                    }
                }
                GradientCard { theme,
                    h3 { style: "margin: 0 0 4px;", "Start Your Journey" }
                    p { style: "margin: 0 0 20px; color: {muted};", "Get early access to Rafiq and be part of the education revolution." }
                    form { onsubmit: move |ev| ev.prevent_default(),
                        label { r#for: "contact-first-name", "First name" }
                        input { id: "contact-first-name", placeholder: "Enter your first name", style: "{input}" }
                        label { r#for: "contact-last-name", "Last name" }
                        input { id: "contact-last-name", placeholder: "Enter your last name", style: "{input}" }
                        label { r#for: "contact-email", "Email" }
                        input { id: "contact-email", r#type: "email", placeholder: "Enter your email", style: "{input}" }
                        label { r#for: "contact-role", "I am a..." }
                        select { id: "contact-role", style: "{input}",
                            for role in content::CONTACT_ROLES {
                                option { key: "{role}", "{role}" }
                            }
                        }
                        label { r#for: "contact-message", "Message" }
                        textarea { id: "contact-message", placeholder: "Tell us about your educational needs...", style: "{input} min-height: 120px;" }
                        button { r#type: "submit", style: "width: 100%; padding: 14px; border-radius: 12px; border: none; background: {gradient}; color: white; font-weight: 600; cursor: pointer;",
                            "Join the Waitlist"
                        }
                    }
                }
            }
        }
    }
}
