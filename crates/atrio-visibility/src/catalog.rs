//! Compiled-in feature ids for the portal surfaces.
//!
//! The admin panel iterates [`all`] to build its toggle list. Ids absent
//! from the override store resolve to visible, so shipping a new surface
//! only means adding its id here — previously stored blobs stay valid.

/// Dashboard KPI cards.
pub const DASHBOARD_KPIS: &str = "dashboard.kpis";
/// "Add KPI" control on the dashboard.
pub const DASHBOARD_KPIS_ADD: &str = "dashboard.kpis.add";

/// The sales listing page.
pub const SALES_LISTING: &str = "sales.listing";
/// Revenue KPI on the sales page.
pub const SALES_KPIS_REVENUE: &str = "sales.kpis.revenue";
/// "Today" quick filter.
pub const SALES_FILTERS_TODAY: &str = "sales.filters.today";
/// "This week" quick filter.
pub const SALES_FILTERS_WEEK: &str = "sales.filters.week";
/// "This month" quick filter.
pub const SALES_FILTERS_MONTH: &str = "sales.filters.month";
/// Sales export control.
pub const SALES_EXPORT: &str = "sales.export";

/// The monthly closing-report inbox.
pub const CLOSINGS_INBOX: &str = "closings.inbox";
/// Report download control.
pub const CLOSINGS_DOWNLOAD: &str = "closings.download";

/// The support ticket list.
pub const SUPPORT_TICKETS: &str = "support.tickets";
/// "Create ticket" control.
pub const SUPPORT_CREATE_TICKET: &str = "support.create_ticket";

/// The building documents page.
pub const DOCUMENTS: &str = "documents";
/// Document upload control.
pub const DOCUMENTS_UPLOAD: &str = "documents.upload";

/// The settings page.
pub const SETTINGS: &str = "settings";
/// The visibility configuration panel itself.
pub const SETTINGS_PERMISSIONS: &str = "settings.permissions";

/// Every feature id the portal ships, for the admin panel's toggle list.
pub fn all() -> &'static [&'static str] {
    &[
        DASHBOARD_KPIS,
        DASHBOARD_KPIS_ADD,
        SALES_LISTING,
        SALES_KPIS_REVENUE,
        SALES_FILTERS_TODAY,
        SALES_FILTERS_WEEK,
        SALES_FILTERS_MONTH,
        SALES_EXPORT,
        CLOSINGS_INBOX,
        CLOSINGS_DOWNLOAD,
        SUPPORT_TICKETS,
        SUPPORT_CREATE_TICKET,
        DOCUMENTS,
        DOCUMENTS_UPLOAD,
        SETTINGS,
        SETTINGS_PERMISSIONS,
    ]
}
