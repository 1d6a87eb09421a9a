//! Copy and asset lists shown on the landing page.

use crate::assets;

pub const APP_NAME: &str = "ExpenseGauge";

/// In-page navigation targets, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::IntoStaticStr)]
pub enum NavLink {
    Features,
    Screenshots,
    Download,
}

impl NavLink {
    /// Label shown in the navbar and mobile menu.
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Element id of the section this link jumps to.
    pub fn section_id(self) -> &'static str {
        match self {
            Self::Features => "features",
            Self::Screenshots => "screenshots",
            Self::Download => "download",
        }
    }

    /// `href` value for the anchor jump.
    pub fn href(self) -> String {
        format!("#{}", self.section_id())
    }
}

pub fn nav_links() -> impl Iterator<Item = NavLink> {
    <NavLink as strum::IntoEnumIterator>::iter()
}

pub struct Hero {
    pub image: &'static str,
    pub image_alt: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub call_to_action: &'static str,
}

pub const HERO: Hero = Hero {
    image: assets::HERO_PREVIEW,
    image_alt: "ExpenseGauge App Preview",
    headline: "Master Your Money, Anytime, Anywhere.",
    tagline: "ExpenseGauge: Your intelligent, offline-first expense manager for effortless financial control.",
    call_to_action: "Download Now",
};

/// One card in the feature grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    /// Accent class for the icon.
    pub accent: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES_HEADING: &str = "Why Choose ExpenseGauge?";

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "💡",
        accent: "accent-indigo",
        title: "Offline-First Power",
        description: "Never miss a beat! Add and edit expenses even without internet. Your data syncs automatically when you're back online.",
    },
    Feature {
        icon: "🧠",
        accent: "accent-green",
        title: "Smart Categorization",
        description: "Our intelligent AI automatically predicts expense categories, making tracking faster and more accurate.",
    },
    Feature {
        icon: "📊",
        accent: "accent-blue",
        title: "Insightful History",
        description: "Visualize your spending with monthly trend charts and easily review transactions grouped by month.",
    },
    Feature {
        icon: "🔒",
        accent: "accent-yellow",
        title: "Secure & Private",
        description: "Your financial data is important. ExpenseGauge ensures secure management of your personal information.",
    },
    Feature {
        icon: "👨‍💼",
        accent: "accent-red",
        title: "Admin Capabilities",
        description: "Admins can manage users, assign balances, and oversee expenses with dedicated tools.",
    },
    Feature {
        icon: "🎨",
        accent: "accent-purple",
        title: "Personalized Theming",
        description: "Switch between light and dark modes to match your preference and reduce eye strain.",
    },
];

/// Where a gallery image comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenshotSource {
    /// Same file in both schemes.
    Fixed(&'static str),
    /// Logical name resolved through [`assets::image_url`].
    Themed(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screenshot {
    pub source: ScreenshotSource,
    pub alt: &'static str,
}

impl Screenshot {
    pub fn url(&self, dark_mode: bool) -> String {
        match self.source {
            ScreenshotSource::Fixed(path) => path.to_owned(),
            ScreenshotSource::Themed(name) => assets::image_url(name, dark_mode),
        }
    }
}

pub const SCREENSHOTS_HEADING: &str = "See ExpenseGauge in Action";

pub const SCREENSHOTS: [Screenshot; 6] = [
    Screenshot {
        source: ScreenshotSource::Fixed("/expensegauge1.jpg"),
        alt: "Screenshot 1 - Home Screen",
    },
    Screenshot {
        source: ScreenshotSource::Fixed("/expensegauge2.jpg"),
        alt: "Screenshot 2 - Add Expense",
    },
    Screenshot {
        source: ScreenshotSource::Fixed("/expensegauge3.jpg"),
        alt: "Screenshot 3 - History",
    },
    Screenshot {
        source: ScreenshotSource::Fixed("/expensegauge4.jpg"),
        alt: "Screenshot 4 - Profile",
    },
    Screenshot {
        source: ScreenshotSource::Themed("admin_preview1"),
        alt: "Screenshot 5 - Admin View 1",
    },
    Screenshot {
        source: ScreenshotSource::Themed("admin_preview2"),
        alt: "Screenshot 6 - Admin View 2",
    },
];

pub const DOWNLOAD_HEADING: &str = "Ready to Take Control of Your Finances?";
pub const DOWNLOAD_TAGLINE: &str =
    "Download ExpenseGauge today and experience a smarter way to manage your money.";
pub const ANDROID_LABEL: &str = "Download for Android (APK)";
pub const IOS_LABEL: &str = "Download for iOS";
