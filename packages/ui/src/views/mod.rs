mod login;
pub use login::LoginView;

mod register;
pub use register::{check_registration, RegisterView};

mod dashboard;
pub use dashboard::DashboardView;

mod dataset_detail;
pub use dataset_detail::{fetch_detail, DatasetDetailView, DetailState};
