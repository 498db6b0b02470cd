//! Public marketing page: hero, feature grid, how-it-works steps, and CTA.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_router::components::A;

/// A feature card on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    /// CSS modifier selecting the card's accent gradient.
    pub accent: &'static str,
}

/// A numbered onboarding step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        title: "Smart Search by Ingredient",
        description: "Find delicious recipes using ingredients you have at home. Our AI-powered search makes cooking easier than ever.",
        accent: "blue",
    },
    Feature {
        title: "Taste-Based Filtering",
        description: "Filter meals by taste profile - spicy, mild, sweet, savory, and more. Customize your culinary experience.",
        accent: "orange",
    },
    Feature {
        title: "AI-Powered Meal Q&A",
        description: "Ask our intelligent AI assistant about calories, cooking methods, substitutions, and nutrition facts.",
        accent: "purple",
    },
    Feature {
        title: "Save & Manage Meals",
        description: "Create personalized collections of your favorite recipes and meals for quick access anytime.",
        accent: "green",
    },
    Feature {
        title: "Add Custom Recipes",
        description: "Share your own culinary creations with the community and build your personal recipe library.",
        accent: "yellow",
    },
    Feature {
        title: "Premium Experience",
        description: "Enjoy ad-free browsing, advanced filters, and exclusive recipes with our premium membership.",
        accent: "indigo",
    },
];

pub const STEPS: [Step; 3] = [
    Step {
        number: "01",
        title: "Search or Add a Meal",
        description: "Browse our extensive meal database or add your own recipes to get started.",
    },
    Step {
        number: "02",
        title: "Explore Details",
        description: "View comprehensive information about ingredients, nutritional values, and cooking instructions.",
    },
    Step {
        number: "03",
        title: "Ask AI for Insights",
        description: "Get personalized recommendations and answers about your meals from our smart AI.",
    },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <section class="landing-hero">
                <span class="landing-hero__badge">"Welcome to the Future of Cooking"</span>
                <h1 class="landing-hero__title">
                    "Discover " <span class="landing-hero__highlight">"Smart Recipes"</span> " with AI"
                </h1>
                <p class="landing-hero__subtitle">
                    "Find the perfect meal by ingredients, taste, and nutrition. Get AI-powered insights and build your personal recipe collection in one beautiful app."
                </p>
                <div class="landing-hero__actions">
                    <A href="/signup" attr:class="btn btn--primary">"Get Started"</A>
                    <A href="/login" attr:class="btn btn--ghost">"Login"</A>
                </div>
            </section>

            <section class="landing-section">
                <h2>"Powerful Features Built for Food Lovers"</h2>
                <p class="landing-section__lead">"Everything you need to discover, create, and share amazing meals"</p>
                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <article class=format!("feature-card feature-card--{}", feature.accent)>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="landing-section">
                <h2>"How It Works"</h2>
                <p class="landing-section__lead">"Get started in three simple steps"</p>
                <ol class="step-list">
                    {STEPS
                        .iter()
                        .map(|step| {
                            view! {
                                <li class="step-card">
                                    <span class="step-card__number">{step.number}</span>
                                    <h3>{step.title}</h3>
                                    <p>{step.description}</p>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ol>
            </section>

            <section class="landing-cta">
                <h2>"Ready to Transform Your Cooking?"</h2>
                <p>
                    "Join thousands of food enthusiasts discovering new recipes and getting AI-powered meal insights every day."
                </p>
                <A href="/signup" attr:class="btn btn--light">"Get Started Now"</A>
            </section>
        </div>
    }
}
