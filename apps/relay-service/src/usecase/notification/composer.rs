//! # メール文面の生成
//!
//! 通知種別ごとの固定文面に、検証済みの入力値を埋め込む。
//!
//! - 件名は種別ごとに固定（入力値を含まない）
//! - 本文はプレーンテキスト。入力値は加工せずにそのまま埋め込む
//! - 同じ入力からは常に同じ件名・本文が得られる

use nayaruvi_domain::{
    air_quality::{AqiStatusReport, Registration},
    notification::AlertNotification,
};

/// 登録確認メールの件名
pub const REGISTRATION_SUBJECT: &str = "Nayaruvi – Air Quality Alert Registration Successful";

/// AQI ステータス通知メールの件名
pub const AQI_STATUS_SUBJECT: &str = "Nayaruvi – Live Air Quality Status Update";

const SIGNATURE: &str = "Regards,\n\
                         Team Nayaruvi\n\
                         Government of India – Environmental Intelligence Platform";

/// 生成済みの件名と本文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedEmail {
    pub subject: String,
    pub body:    String,
}

/// 通知から件名と本文を生成する
pub fn compose(notification: &AlertNotification) -> ComposedEmail {
    match notification {
        AlertNotification::Registration(registration) => ComposedEmail {
            subject: REGISTRATION_SUBJECT.to_string(),
            body:    registration_body(registration),
        },
        AlertNotification::AqiStatus(report) => ComposedEmail {
            subject: AQI_STATUS_SUBJECT.to_string(),
            body:    aqi_status_body(report),
        },
    }
}

fn registration_body(registration: &Registration) -> String {
    format!(
        "Dear {name},\n\
         \n\
         ✅ You have been successfully registered for Nayaruvi Air Quality Alerts.\n\
         \n\
         📍 Registered PIN Code: {pincode}\n\
         \n\
         You will now receive email alerts whenever air quality in your area becomes unsafe.\n\
         \n\
         🌱 Stay informed. Stay safe.\n\
         \n\
         {SIGNATURE}\n",
        name = registration.name(),
        pincode = registration.pincode(),
    )
}

fn aqi_status_body(report: &AqiStatusReport) -> String {
    format!(
        "Dear Citizen,\n\
         \n\
         🌍 Nayaruvi – Real-Time Air Quality Update\n\
         \n\
         📍 Location : {location}\n\
         📊 AQI Value : {aqi}\n\
         ⚠ AQI Status: {status}\n\
         \n\
         🛡 Health Advisory:\n\
         {advice}\n\
         \n\
         Please follow the recommended safety measures.\n\
         \n\
         {SIGNATURE}\n",
        location = report.location(),
        aqi = report.aqi(),
        status = report.status(),
        advice = report.advice(),
    )
}
