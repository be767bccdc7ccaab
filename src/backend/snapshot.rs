use crate::backend::actor::BackendActor;
use crate::docket::datetime::TimestampNanos;
use crate::docket::files::{self, BlobHandle};
use crate::docket::model::{
    DepartmentId, EvidenceFile, EvidenceKind, FileId, Incident, IncidentId, IncidentStatus,
    PoliceDepartment, Principal, StalkerProfile, UserProfile, UserRole, UserSettings,
    VictimSurvivorInfo,
};
use anyhow::{Context, Result, anyhow, bail};
use chrono::Utc;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

const UPLOAD_PROGRESS_CHUNK: u64 = 1024 * 1024;

/// Load a JSON array of records as exported from the backend.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

/// Load a single optional record (e.g. a settings export).
pub fn load_record<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

/// Stand-in for the remote backend actor, serving records from exported
/// snapshots. It keeps the actor's observable rules: ids and report numbers
/// are assigned here, caller-scoped reads answer only for the authenticated
/// caller, and admin calls require the admin role.
#[derive(Debug, Default)]
pub struct SnapshotBackend {
    caller: Option<Principal>,
    /// When set, caller-scoped reads filter by author; otherwise the loaded
    /// collections are trusted to already be caller-scoped (CLI snapshots).
    scope_by_author: bool,
    role: UserRole,
    profile: Option<UserProfile>,
    settings: Option<UserSettings>,
    victim_info: Option<VictimSurvivorInfo>,
    incidents: Vec<Incident>,
    evidence: Vec<EvidenceFile>,
    stalker_profiles: Vec<StalkerProfile>,
    departments: Vec<PoliceDepartment>,
}

impl SnapshotBackend {
    /// Backend for CLI snapshots: one authenticated local caller, collections
    /// taken as caller-scoped.
    pub fn local(caller: impl Into<String>) -> Self {
        Self {
            caller: Some(Principal::new(caller)),
            ..Self::default()
        }
    }

    /// Backend with multi-user records; caller-scoped reads filter by author.
    pub fn for_caller(caller: Principal) -> Self {
        Self {
            caller: Some(caller),
            scope_by_author: true,
            ..Self::default()
        }
    }

    /// Unauthenticated backend; caller-scoped calls fail.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_incidents(mut self, incidents: Vec<Incident>) -> Self {
        self.incidents = incidents;
        self
    }

    pub fn with_evidence(mut self, evidence: Vec<EvidenceFile>) -> Self {
        self.evidence = evidence;
        self
    }

    pub fn with_departments(mut self, departments: Vec<PoliceDepartment>) -> Self {
        self.departments = departments;
        self
    }

    pub fn with_settings(mut self, settings: Option<UserSettings>) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_profile(mut self, profile: Option<UserProfile>) -> Self {
        self.profile = profile;
        self
    }

    fn caller(&self) -> Result<&Principal> {
        self.caller
            .as_ref()
            .ok_or_else(|| anyhow!("caller is not authenticated (anonymous principal)"))
    }

    fn require_admin(&self) -> Result<()> {
        self.caller()?;
        if self.role != UserRole::Admin {
            bail!("admin role required");
        }
        Ok(())
    }

    fn owned_by_caller<'a, T>(
        &self,
        records: &'a [T],
        author_of: impl Fn(&T) -> &Principal,
    ) -> Result<Vec<&'a T>> {
        let caller = self.caller()?;
        Ok(records
            .iter()
            .filter(|record| !self.scope_by_author || author_of(record) == caller)
            .collect())
    }

    fn now_nanos() -> TimestampNanos {
        Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX)
    }

    fn next_incident_id(&self) -> IncidentId {
        self.incidents.iter().map(|i| i.id).max().unwrap_or(0) + 1
    }

    fn next_file_id(&self) -> FileId {
        self.evidence.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }
}

impl BackendActor for SnapshotBackend {
    fn get_caller_user_profile(&self) -> Result<Option<UserProfile>> {
        self.caller()?;
        Ok(self.profile.clone())
    }

    fn get_caller_user_settings(&self) -> Result<Option<UserSettings>> {
        self.caller()?;
        Ok(self.settings.clone())
    }

    fn get_caller_victim_survivor_info(&self) -> Result<Option<VictimSurvivorInfo>> {
        self.caller()?;
        Ok(self.victim_info.clone())
    }

    fn get_caller_incidents(&self) -> Result<Vec<Incident>> {
        Ok(self
            .owned_by_caller(&self.incidents, |i: &Incident| &i.author)?
            .into_iter()
            .cloned()
            .collect())
    }

    fn get_caller_evidence(&self) -> Result<Vec<EvidenceFile>> {
        Ok(self
            .owned_by_caller(&self.evidence, |e: &EvidenceFile| &e.author)?
            .into_iter()
            .cloned()
            .collect())
    }

    fn get_caller_stalker_profiles(&self) -> Result<Vec<StalkerProfile>> {
        self.caller()?;
        Ok(self.stalker_profiles.clone())
    }

    fn get_caller_police_departments(&self) -> Result<Vec<PoliceDepartment>> {
        Ok(self
            .owned_by_caller(&self.departments, |d: &PoliceDepartment| &d.added_by)?
            .into_iter()
            .cloned()
            .collect())
    }

    fn get_caller_user_role(&self) -> Result<UserRole> {
        self.caller()?;
        Ok(self.role)
    }

    fn get_verified_police_departments(&self) -> Result<Vec<PoliceDepartment>> {
        Ok(self
            .departments
            .iter()
            .filter(|d| d.is_verified)
            .cloned()
            .collect())
    }

    fn get_incident_by_id(&self, id: IncidentId) -> Result<Option<Incident>> {
        Ok(self.incidents.iter().find(|i| i.id == id).cloned())
    }

    fn get_evidence_by_id(&self, id: FileId) -> Result<Option<EvidenceFile>> {
        Ok(self.evidence.iter().find(|e| e.id == id).cloned())
    }

    fn is_caller_admin(&self) -> Result<bool> {
        self.caller()?;
        Ok(self.role == UserRole::Admin)
    }

    fn get_all_incidents(&self) -> Result<Vec<Incident>> {
        self.require_admin()?;
        Ok(self.incidents.clone())
    }

    fn get_all_evidence(&self) -> Result<Vec<EvidenceFile>> {
        self.require_admin()?;
        Ok(self.evidence.clone())
    }

    fn get_all_police_departments(&self) -> Result<Vec<PoliceDepartment>> {
        self.require_admin()?;
        Ok(self.departments.clone())
    }

    fn get_user_incidents(&self, user: &Principal) -> Result<Vec<Incident>> {
        self.require_admin()?;
        Ok(self
            .incidents
            .iter()
            .filter(|i| &i.author == user)
            .cloned()
            .collect())
    }

    fn get_user_police_departments(&self, user: &Principal) -> Result<Vec<PoliceDepartment>> {
        self.require_admin()?;
        Ok(self
            .departments
            .iter()
            .filter(|d| &d.added_by == user)
            .cloned()
            .collect())
    }

    fn get_user_profile(&self, user: &Principal) -> Result<Option<UserProfile>> {
        self.require_admin()?;
        if self.caller.as_ref() == Some(user) {
            Ok(self.profile.clone())
        } else {
            Ok(None)
        }
    }

    fn save_caller_user_profile(&mut self, profile: UserProfile) -> Result<()> {
        self.caller()?;
        self.profile = Some(profile);
        Ok(())
    }

    fn save_user_settings(&mut self, settings: UserSettings) -> Result<()> {
        self.caller()?;
        self.settings = Some(settings);
        Ok(())
    }

    fn save_victim_survivor_info(&mut self, info: VictimSurvivorInfo) -> Result<()> {
        self.caller()?;
        self.victim_info = Some(info);
        Ok(())
    }

    fn report_incident(&mut self, title: &str, description: &str) -> Result<Incident> {
        let author = self.caller()?.clone();
        let id = self.next_incident_id();
        let incident = Incident {
            id,
            status: IncidentStatus::Open,
            title: title.to_string(),
            report_number: format!("CAR-{id:04}"),
            description: description.to_string(),
            author,
            timestamp: Self::now_nanos(),
            evidence_ids: Vec::new(),
        };
        self.incidents.push(incident.clone());
        Ok(incident)
    }

    fn upload_evidence(
        &mut self,
        title: &str,
        description: &str,
        kind: EvidenceKind,
        file: BlobHandle,
        incident_id: IncidentId,
        on_progress: &mut dyn FnMut(f64),
    ) -> Result<EvidenceFile> {
        let author = self.caller()?.clone();
        let Some(incident_index) = self.incidents.iter().position(|i| i.id == incident_id) else {
            bail!("incident {incident_id} not found");
        };

        files::report_upload_progress(file.byte_len(), UPLOAD_PROGRESS_CHUNK, on_progress);

        let id = self.next_file_id();
        let record = EvidenceFile {
            id,
            title: title.to_string(),
            description: description.to_string(),
            kind,
            file,
            author,
            timestamp: Self::now_nanos(),
        };
        self.evidence.push(record.clone());
        self.incidents[incident_index].evidence_ids.push(id);
        Ok(record)
    }

    fn save_stalker_profile(
        &mut self,
        name: &str,
        description: &str,
        notes: &str,
    ) -> Result<StalkerProfile> {
        self.caller()?;
        let id = self.stalker_profiles.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let profile = StalkerProfile {
            id,
            name: name.to_string(),
            description: description.to_string(),
            notes: notes.to_string(),
        };
        self.stalker_profiles.push(profile.clone());
        Ok(profile)
    }

    fn save_police_department(
        &mut self,
        name: &str,
        address: &str,
        phone: &str,
        website: &str,
    ) -> Result<PoliceDepartment> {
        let added_by = self.caller()?.clone();
        let id = self.departments.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        let department = PoliceDepartment {
            id,
            name: name.to_string(),
            address: address.to_string(),
            phone: phone.to_string(),
            website: website.to_string(),
            is_verified: false,
            added_by,
        };
        self.departments.push(department.clone());
        Ok(department)
    }

    fn assign_user_role(&mut self, user: &Principal, role: UserRole) -> Result<()> {
        self.require_admin()?;
        if self.caller.as_ref() == Some(user) {
            self.role = role;
        }
        Ok(())
    }

    fn verify_police_department(&mut self, id: DepartmentId) -> Result<()> {
        self.require_admin()?;
        let Some(dept) = self.departments.iter_mut().find(|d| d.id == id) else {
            bail!("police department {id} not found");
        };
        dept.is_verified = true;
        Ok(())
    }
}
