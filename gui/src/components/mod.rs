// GUI components module
pub mod intake_form;
pub mod notice_banner;
pub mod record_card;
pub mod review_panel;
pub mod toolbar;

pub use intake_form::IntakeForm;
pub use notice_banner::NoticeBanner;
pub use record_card::RecordCard;
pub use review_panel::ReviewPanel;
pub use toolbar::Toolbar;
