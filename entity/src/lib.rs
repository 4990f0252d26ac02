pub mod company;
pub mod company_contact;

pub mod assessment;
pub mod engagement;
pub mod task;

pub mod due_diligence_request;

pub mod document;

pub mod audit_log;
pub mod user;

pub mod assessment_status;
pub mod assessment_type;
pub mod company_status;
pub mod document_status;
pub mod document_type;
pub mod due_diligence_status;
pub mod engagement_status;
pub mod risk_level;
pub mod task_status;
pub mod user_role;
