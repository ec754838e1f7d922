//! The closed set of technology tags and their display data.

use std::fmt::{Display, Formatter, Result};

use serde::Serialize;

/// Primary technology stack of a project directory.
///
/// Exactly one tag is the classification result for a directory. Every tag
/// has an icon in both [`Technology::devicon_class`] and
/// [`Technology::emoji`]; both are exhaustive matches, so adding a variant
/// without an icon does not compile.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Technology {
    /// Nothing matched.
    Unknown,
    JavaScript,
    TypeScript,
    React,
    Vue,
    Angular,
    Node,
    Python,
    Java,
    CSharp,
    Php,
    Go,
    Rust,
    Ruby,
    Flutter,
    Swift,
    Kotlin,
    CPlusPlus,
    C,
    Docker,
    Git,
    Laravel,
    Django,
    Symfony,
    WordPress,
    Yii,
    Zend,
}

impl Technology {
    /// Every tag, `Unknown` first.
    pub const ALL: [Self; 27] = [
        Self::Unknown,
        Self::JavaScript,
        Self::TypeScript,
        Self::React,
        Self::Vue,
        Self::Angular,
        Self::Node,
        Self::Python,
        Self::Java,
        Self::CSharp,
        Self::Php,
        Self::Go,
        Self::Rust,
        Self::Ruby,
        Self::Flutter,
        Self::Swift,
        Self::Kotlin,
        Self::CPlusPlus,
        Self::C,
        Self::Docker,
        Self::Git,
        Self::Laravel,
        Self::Django,
        Self::Symfony,
        Self::WordPress,
        Self::Yii,
        Self::Zend,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::React => "React",
            Self::Vue => "Vue",
            Self::Angular => "Angular",
            Self::Node => "Node.js",
            Self::Python => "Python",
            Self::Java => "Java",
            Self::CSharp => "C#",
            Self::Php => "PHP",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::Ruby => "Ruby",
            Self::Flutter => "Flutter",
            Self::Swift => "Swift",
            Self::Kotlin => "Kotlin",
            Self::CPlusPlus => "C++",
            Self::C => "C",
            Self::Docker => "Docker",
            Self::Git => "Git",
            Self::Laravel => "Laravel",
            Self::Django => "Django",
            Self::Symfony => "Symfony",
            Self::WordPress => "WordPress",
            Self::Yii => "Yii",
            Self::Zend => "Zend",
        }
    }

    /// Devicon CSS class used by the rendered project list.
    #[must_use]
    pub const fn devicon_class(self) -> &'static str {
        match self {
            Self::Unknown => "devicon-folder-plain",
            Self::JavaScript => "devicon-javascript-plain colored",
            Self::TypeScript => "devicon-typescript-plain colored",
            Self::React => "devicon-react-original colored",
            Self::Vue => "devicon-vuejs-plain colored",
            Self::Angular => "devicon-angularjs-plain colored",
            Self::Node => "devicon-nodejs-plain colored",
            Self::Python => "devicon-python-plain colored",
            Self::Java => "devicon-java-plain colored",
            Self::CSharp => "devicon-csharp-plain colored",
            Self::Php => "devicon-php-plain colored",
            Self::Go => "devicon-go-plain colored",
            Self::Rust => "devicon-rust-plain colored",
            Self::Ruby => "devicon-ruby-plain colored",
            Self::Flutter => "devicon-flutter-plain colored",
            Self::Swift => "devicon-swift-plain colored",
            Self::Kotlin => "devicon-kotlin-plain colored",
            Self::CPlusPlus => "devicon-cplusplus-plain colored",
            Self::C => "devicon-c-plain colored",
            Self::Docker => "devicon-docker-plain colored",
            Self::Git => "devicon-git-plain colored",
            Self::Laravel => "devicon-laravel-plain colored",
            Self::Django => "devicon-django-plain colored",
            Self::Symfony => "devicon-symfony-plain colored",
            Self::WordPress => "devicon-wordpress-plain colored",
            Self::Yii => "devicon-yii-plain colored",
            Self::Zend => "devicon-zend-plain colored",
        }
    }

    /// Single-glyph icon for terminal output.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Unknown => "📁",
            Self::JavaScript => "🟨",
            Self::TypeScript => "🔷",
            Self::React => "⚛️",
            Self::Vue => "🟩",
            Self::Angular => "🅰️",
            Self::Node => "🟢",
            Self::Python => "🐍",
            Self::Java => "☕",
            Self::CSharp => "🔶",
            Self::Php => "🐘",
            Self::Go => "🔵",
            Self::Rust => "🦀",
            Self::Ruby => "💎",
            Self::Flutter => "🦋",
            Self::Swift => "🐦",
            Self::Kotlin => "🟣",
            Self::CPlusPlus => "🔧",
            Self::C => "©️",
            Self::Docker => "🐳",
            Self::Git => "📊",
            Self::Laravel => "🟥",
            Self::Django => "🎸",
            Self::Symfony => "🎼",
            Self::WordPress => "📰",
            Self::Yii => "🍃",
            Self::Zend => "⚡",
        }
    }
}

impl Display for Technology {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.display_name())
    }
}
