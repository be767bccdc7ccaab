use crate::docket::files::BlobHandle;
use crate::docket::model::{
    DepartmentId, EvidenceFile, EvidenceKind, FileId, Incident, IncidentId, PoliceDepartment,
    Principal, StalkerProfile, UserProfile, UserRole, UserSettings, VictimSurvivorInfo,
};
use anyhow::Result;

/// Contract of the remote backend actor. Semantic only; transport and wire
/// format live behind the implementation. Identifiers and report numbers are
/// assigned behind this trait, never by callers.
pub trait BackendActor {
    // Caller-scoped reads.
    fn get_caller_user_profile(&self) -> Result<Option<UserProfile>>;
    fn get_caller_user_settings(&self) -> Result<Option<UserSettings>>;
    fn get_caller_victim_survivor_info(&self) -> Result<Option<VictimSurvivorInfo>>;
    fn get_caller_incidents(&self) -> Result<Vec<Incident>>;
    fn get_caller_evidence(&self) -> Result<Vec<EvidenceFile>>;
    fn get_caller_stalker_profiles(&self) -> Result<Vec<StalkerProfile>>;
    fn get_caller_police_departments(&self) -> Result<Vec<PoliceDepartment>>;
    fn get_caller_user_role(&self) -> Result<UserRole>;

    // Global reads.
    fn get_verified_police_departments(&self) -> Result<Vec<PoliceDepartment>>;
    fn get_incident_by_id(&self, id: IncidentId) -> Result<Option<Incident>>;
    fn get_evidence_by_id(&self, id: FileId) -> Result<Option<EvidenceFile>>;

    // Admin-scoped reads.
    fn is_caller_admin(&self) -> Result<bool>;
    fn get_all_incidents(&self) -> Result<Vec<Incident>>;
    fn get_all_evidence(&self) -> Result<Vec<EvidenceFile>>;
    fn get_all_police_departments(&self) -> Result<Vec<PoliceDepartment>>;
    fn get_user_incidents(&self, user: &Principal) -> Result<Vec<Incident>>;
    fn get_user_police_departments(&self, user: &Principal) -> Result<Vec<PoliceDepartment>>;
    fn get_user_profile(&self, user: &Principal) -> Result<Option<UserProfile>>;

    // Caller-scoped writes.
    fn save_caller_user_profile(&mut self, profile: UserProfile) -> Result<()>;
    fn save_user_settings(&mut self, settings: UserSettings) -> Result<()>;
    fn save_victim_survivor_info(&mut self, info: VictimSurvivorInfo) -> Result<()>;
    fn report_incident(&mut self, title: &str, description: &str) -> Result<Incident>;
    /// Upload evidence linked to an incident. `on_progress` is invoked
    /// synchronously with fractional percentages, finishing at 100.
    fn upload_evidence(
        &mut self,
        title: &str,
        description: &str,
        kind: EvidenceKind,
        file: BlobHandle,
        incident_id: IncidentId,
        on_progress: &mut dyn FnMut(f64),
    ) -> Result<EvidenceFile>;
    fn save_stalker_profile(
        &mut self,
        name: &str,
        description: &str,
        notes: &str,
    ) -> Result<StalkerProfile>;
    fn save_police_department(
        &mut self,
        name: &str,
        address: &str,
        phone: &str,
        website: &str,
    ) -> Result<PoliceDepartment>;

    // Admin writes.
    fn assign_user_role(&mut self, user: &Principal, role: UserRole) -> Result<()>;
    fn verify_police_department(&mut self, id: DepartmentId) -> Result<()>;
}
