use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level screen the presentation surface should render.
///
/// 顶层路由标签：展示层只根据它决定渲染哪个界面。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppState {
    /// Splash screen while the launch sequence runs.
    #[default]
    LaunchLoading,
    /// Marketing value screens for signed-out users.
    ValueScreens,
    SignIn,
    Onboarding,
    /// Pass-through state; the presentation surface advances it to the paywall.
    Survey,
    Paywall,
    /// Steady state for a subscribed or admitted user.
    MainTabs,
}

impl AppState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppState::LaunchLoading => "launch_loading",
            AppState::ValueScreens => "value_screens",
            AppState::SignIn => "sign_in",
            AppState::Onboarding => "onboarding",
            AppState::Survey => "survey",
            AppState::Paywall => "paywall",
            AppState::MainTabs => "main_tabs",
        }
    }

    /// States that resume reconciliation is allowed to flip between.
    pub fn is_subscription_gated(&self) -> bool {
        matches!(self, AppState::Paywall | AppState::MainTabs)
    }
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
