pub mod button;
pub mod dharma_card;
pub mod dharma_page;
pub mod notification_bar;
pub mod share_buttons;

pub use button::Button;
pub use dharma_card::DharmaCard;
pub use dharma_page::DharmaPage;
pub use notification_bar::NotificationBar;
pub use share_buttons::ShareButtons;
