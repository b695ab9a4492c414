/// Named color variants for [`crate::components::Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeColor {
    #[default]
    Indigo,
    Purple,
    Emerald,
    Rose,
    Blue,
}

impl ThemeColor {
    /// Fill, hover fill, and focus ring classes for this variant
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Indigo => "bg-indigo-600 text-white hover:bg-indigo-700 focus:ring-indigo-500",
            Self::Purple => "bg-purple-600 text-white hover:bg-purple-700 focus:ring-purple-500",
            Self::Emerald => {
                "bg-emerald-600 text-white hover:bg-emerald-700 focus:ring-emerald-500"
            }
            Self::Rose => "bg-rose-600 text-white hover:bg-rose-700 focus:ring-rose-500",
            Self::Blue => "bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-500",
        }
    }
}
