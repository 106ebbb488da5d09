//! Record types for the Livestatus tables served by the API.
//!
//! Field order is the column order of the query; see `livestatus_record!`.

livestatus_record! {
    /// A host or service comment.
    pub struct Comment from "comments" {
        pub id: i64 = "id",
        pub author: String = "author",
        pub comment: String = "comment",
        pub entry_time: i64 = "entry_time",
        pub entry_type: i64 = "entry_type",
        pub expire_time: i64 = "expire_time",
        pub expires: bool = "expires",
        #[serde(rename = "type")]
        pub kind: i64 = "type",
        pub host_name: String = "host_name",
        /// Unset for comments attached to a host.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub service_description: Option<String> = "service_description",
    }
}

livestatus_record! {
    /// A notification contact.
    pub struct Contact from "contacts" {
        pub id: i64 = "id",
        pub name: String = "name",
        pub alias: String = "alias",
        pub email: String = "email",
        pub pager: String = "pager",
        pub host_notification_period: String = "host_notification_period",
        pub host_notifications_enabled: bool = "host_notifications_enabled",
        pub service_notification_period: String = "service_notification_period",
        pub service_notifications_enabled: bool = "service_notifications_enabled",
    }
}

livestatus_record! {
    /// A scheduled host or service downtime.
    pub struct Downtime from "downtimes" {
        pub id: i64 = "id",
        pub author: String = "author",
        pub comment: String = "comment",
        pub duration: i64 = "duration",
        pub start_time: i64 = "start_time",
        pub end_time: i64 = "end_time",
        pub entry_time: i64 = "entry_time",
        pub fixed: bool = "fixed",
        #[serde(rename = "type")]
        pub kind: i64 = "type",
        pub host_name: String = "host_name",
        /// Unset for downtimes scheduled on a host.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub service_description: Option<String> = "service_description",
    }
}

livestatus_record! {
    /// A monitored host with its current state.
    pub struct Host from "hosts" {
        pub id: i64 = "id",
        pub name: String = "name",
        pub alias: String = "alias",
        pub acknowledged: bool = "acknowledged",
        pub address: String = "address",
        pub check_period: String = "check_period",
        pub check_source: String = "check_source",
        pub checks_enabled: bool = "checks_enabled",
        pub comments: Vec<i64> = "comments",
        pub contacts: Vec<String> = "contacts",
        pub downtimes: Vec<i64> = "downtimes",
        pub event_handler: String = "event_handler",
        pub event_handler_enabled: bool = "event_handler_enabled",
        pub execution_time: i64 = "execution_time",
        pub flap_detection_enabled: bool = "flap_detection_enabled",
        pub groups: Vec<String> = "groups",
        pub hard_state: i64 = "hard_state",
        pub has_been_checked: bool = "has_been_checked",
        pub in_check_period: bool = "in_check_period",
        pub in_notification_period: bool = "in_notification_period",
        pub is_flapping: bool = "is_flapping",
        pub last_check: i64 = "last_check",
        pub last_notification: i64 = "last_notification",
        pub last_state_change: i64 = "last_state_change",
        pub last_time_down: i64 = "last_time_down",
        pub last_time_unreachable: i64 = "last_time_unreachable",
        pub last_time_up: i64 = "last_time_up",
        pub latency: i64 = "latency",
        pub next_check: i64 = "next_check",
        pub next_notification: i64 = "next_notification",
        pub notification_period: String = "notification_period",
        pub notifications_enabled: bool = "notifications_enabled",
        pub number_of_services: i64 = "num_services",
        pub number_of_services_hard_critical: i64 = "num_services_hard_crit",
        pub number_of_services_hard_ok: i64 = "num_services_hard_ok",
        pub number_of_services_hard_unknown: i64 = "num_services_hard_unknown",
        pub number_of_services_hard_warning: i64 = "num_services_hard_warn",
        pub number_of_services_pending: i64 = "num_services_pending",
        pub state: i64 = "state",
        pub state_type: i64 = "state_type",
        pub services: Vec<String> = "services",
    }
}

livestatus_record! {
    /// A service check attached to a host.
    pub struct Service from "services" {
        pub id: i64 = "id",
        pub acknowledged: bool = "acknowledged",
        pub check_period: String = "check_period",
        pub check_source: String = "check_source",
        pub check_type: i64 = "check_type",
        pub checks_enabled: bool = "checks_enabled",
        pub comments: Vec<i64> = "comments",
        pub contacts: Vec<String> = "contacts",
        pub description: String = "description",
        pub downtimes: Vec<i64> = "downtimes",
        pub event_handler: String = "event_handler",
        pub event_handler_enabled: bool = "event_handler_enabled",
        pub execution_time: i64 = "execution_time",
        pub flap_detection_enabled: bool = "flap_detection_enabled",
        pub groups: Vec<String> = "groups",
        pub has_been_checked: bool = "has_been_checked",
        pub in_check_period: bool = "in_check_period",
        pub in_notification_period: bool = "in_notification_period",
        pub is_flapping: bool = "is_flapping",
        pub last_check: i64 = "last_check",
        pub last_notification: i64 = "last_notification",
        pub last_state_change: i64 = "last_state_change",
        pub last_time_critical: i64 = "last_time_critical",
        pub last_time_ok: i64 = "last_time_ok",
        pub last_time_unknown: i64 = "last_time_unknown",
        pub last_time_warning: i64 = "last_time_warning",
        pub latency: i64 = "latency",
        pub next_check: i64 = "next_check",
        pub next_notification: i64 = "next_notification",
        pub notification_period: String = "notification_period",
        pub notifications_enabled: bool = "notifications_enabled",
        pub state: i64 = "state",
        pub state_type: i64 = "state_type",
        pub host_id: i64 = "host_id",
        pub host_name: String = "host_name",
    }
}
