//! Display palettes for lists and user avatars.
//!
//! New lists get a random icon and color theme; users pick an avatar color,
//! defaulting to the first entry.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Glyphs a new list can be given
pub const LIST_ICONS: &[&str] = &["📋", "✨", "🚀", "💡", "🎨", "📚"];

/// Gradient themes a new list can be given
pub const LIST_COLORS: &[&str] = &[
    "from-indigo-200 to-blue-200",
    "from-orange-200 to-red-200",
    "from-teal-200 to-cyan-200",
    "from-yellow-200 to-amber-200",
    "from-violet-200 to-fuchsia-200",
    "from-lime-200 to-green-200",
];

/// Avatar colors offered for users
pub const USER_COLORS: &[&str] = &[
    "bg-blue-300",
    "bg-pink-300",
    "bg-green-300",
    "bg-purple-300",
    "bg-yellow-300",
    "bg-red-300",
    "bg-indigo-300",
    "bg-orange-300",
    "bg-teal-300",
    "bg-cyan-300",
];

/// Pick an icon for a new list
pub fn random_list_icon<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(LIST_ICONS, rng)
}

/// Pick a color theme for a new list
pub fn random_list_color<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(LIST_COLORS, rng)
}

/// The avatar color used when none is given
pub fn default_user_color() -> &'static str {
    USER_COLORS[0]
}

fn pick<R: Rng + ?Sized>(palette: &'static [&'static str], rng: &mut R) -> &'static str {
    // palettes are non-empty constants
    palette.choose(rng).copied().unwrap_or(palette[0])
}
