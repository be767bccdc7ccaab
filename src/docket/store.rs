use crate::backend::BackendActor;
use crate::docket::files::BlobHandle;
use crate::docket::model::{
    DepartmentId, EvidenceFile, EvidenceKind, Incident, IncidentId, PoliceDepartment, Principal,
    StalkerProfile, UserProfile, UserRole, UserSettings, VictimSurvivorInfo,
};
use crate::docket::warn;
use crate::error::classify_backend_failure;
use anyhow::{Error, Result, anyhow};

/// One cached request/response unit. Holds the last fetched value until
/// invalidated; a fetch that fails gets exactly one automatic retry.
#[derive(Debug, Default)]
pub struct QuerySlot<T> {
    value: Option<T>,
    loading: bool,
}

impl<T> QuerySlot<T> {
    fn get_or_fetch(&mut self, key: &str, mut fetch: impl FnMut() -> Result<T>) -> Result<&T> {
        if self.value.is_none() {
            self.loading = true;
            let fetched = match fetch() {
                Ok(value) => Ok(value),
                Err(err) => {
                    warn::emit("QUERY_RETRY", "fetch", key, &format!("{err:#}"));
                    fetch()
                }
            };
            self.loading = false;
            let value = fetched.map_err(map_backend_error)?;
            self.value = Some(value);
        }

        self.value
            .as_ref()
            .ok_or_else(|| anyhow!("query slot empty after fetch"))
    }

    pub fn invalidate(&mut self) {
        self.value = None;
    }

    pub fn is_cached(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

fn map_backend_error(err: Error) -> Error {
    Error::new(classify_backend_failure(&format!("{err:#}")))
}

/// Client-side view of the backend: cached reads, mutations that invalidate
/// the affected caches wholesale. No optimistic local mutation; the next
/// read refetches.
#[derive(Debug, Default)]
pub struct ClientStore<B: BackendActor> {
    backend: B,
    profile: QuerySlot<Option<UserProfile>>,
    settings: QuerySlot<Option<UserSettings>>,
    victim_info: QuerySlot<Option<VictimSurvivorInfo>>,
    incidents: QuerySlot<Vec<Incident>>,
    evidence: QuerySlot<Vec<EvidenceFile>>,
    stalker_profiles: QuerySlot<Vec<StalkerProfile>>,
    personal_departments: QuerySlot<Vec<PoliceDepartment>>,
    verified_departments: QuerySlot<Vec<PoliceDepartment>>,
    role: QuerySlot<UserRole>,
}

impl<B: BackendActor> ClientStore<B> {
    pub fn new(backend: B) -> Self
    where
        B: Default,
    {
        Self {
            backend,
            ..Self::default()
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // Reads.

    pub fn profile(&mut self) -> Result<Option<&UserProfile>> {
        let backend = &self.backend;
        let cached = self
            .profile
            .get_or_fetch("currentUserProfile", || backend.get_caller_user_profile())?;
        Ok(cached.as_ref())
    }

    pub fn settings(&mut self) -> Result<Option<&UserSettings>> {
        let backend = &self.backend;
        let cached = self
            .settings
            .get_or_fetch("userSettings", || backend.get_caller_user_settings())?;
        Ok(cached.as_ref())
    }

    pub fn victim_info(&mut self) -> Result<Option<&VictimSurvivorInfo>> {
        let backend = &self.backend;
        let cached = self.victim_info.get_or_fetch("victimSurvivorInfo", || {
            backend.get_caller_victim_survivor_info()
        })?;
        Ok(cached.as_ref())
    }

    pub fn incidents(&mut self) -> Result<&[Incident]> {
        let backend = &self.backend;
        let cached = self
            .incidents
            .get_or_fetch("incidents", || backend.get_caller_incidents())?;
        Ok(cached)
    }

    pub fn evidence(&mut self) -> Result<&[EvidenceFile]> {
        let backend = &self.backend;
        let cached = self
            .evidence
            .get_or_fetch("evidence", || backend.get_caller_evidence())?;
        Ok(cached)
    }

    pub fn stalker_profiles(&mut self) -> Result<&[StalkerProfile]> {
        let backend = &self.backend;
        let cached = self.stalker_profiles.get_or_fetch("stalkerProfiles", || {
            backend.get_caller_stalker_profiles()
        })?;
        Ok(cached)
    }

    pub fn personal_departments(&mut self) -> Result<&[PoliceDepartment]> {
        let backend = &self.backend;
        let cached = self
            .personal_departments
            .get_or_fetch("personalPoliceDepartments", || {
                backend.get_caller_police_departments()
            })?;
        Ok(cached)
    }

    pub fn verified_departments(&mut self) -> Result<&[PoliceDepartment]> {
        let backend = &self.backend;
        let cached = self
            .verified_departments
            .get_or_fetch("verifiedPoliceDepartments", || {
                backend.get_verified_police_departments()
            })?;
        Ok(cached)
    }

    pub fn role(&mut self) -> Result<UserRole> {
        let backend = &self.backend;
        let cached = self
            .role
            .get_or_fetch("userRole", || backend.get_caller_user_role())?;
        Ok(*cached)
    }

    pub fn incident(&mut self, id: IncidentId) -> Result<Option<&Incident>> {
        Ok(self.incidents()?.iter().find(|i| i.id == id))
    }

    // Mutations. Each one invalidates the caches it can stale.

    pub fn save_profile(&mut self, profile: UserProfile) -> Result<()> {
        self.backend
            .save_caller_user_profile(profile)
            .map_err(map_backend_error)?;
        self.profile.invalidate();
        Ok(())
    }

    pub fn save_settings(&mut self, settings: UserSettings) -> Result<()> {
        self.backend
            .save_user_settings(settings)
            .map_err(map_backend_error)?;
        self.settings.invalidate();
        Ok(())
    }

    pub fn save_victim_info(&mut self, info: VictimSurvivorInfo) -> Result<()> {
        self.backend
            .save_victim_survivor_info(info)
            .map_err(map_backend_error)?;
        self.victim_info.invalidate();
        Ok(())
    }

    pub fn report_incident(&mut self, title: &str, description: &str) -> Result<Incident> {
        let created = self
            .backend
            .report_incident(title, description)
            .map_err(map_backend_error)?;
        self.incidents.invalidate();
        Ok(created)
    }

    pub fn upload_evidence(
        &mut self,
        title: &str,
        description: &str,
        kind: EvidenceKind,
        file: BlobHandle,
        incident_id: IncidentId,
        on_progress: &mut dyn FnMut(f64),
    ) -> Result<EvidenceFile> {
        // Client-side validation; the backend call is not attempted on failure.
        crate::docket::files::validate_file_size(file.byte_len())?;
        let created = self
            .backend
            .upload_evidence(title, description, kind, file, incident_id, on_progress)
            .map_err(map_backend_error)?;
        self.evidence.invalidate();
        self.incidents.invalidate();
        Ok(created)
    }

    pub fn save_stalker_profile(
        &mut self,
        name: &str,
        description: &str,
        notes: &str,
    ) -> Result<StalkerProfile> {
        let created = self
            .backend
            .save_stalker_profile(name, description, notes)
            .map_err(map_backend_error)?;
        self.stalker_profiles.invalidate();
        Ok(created)
    }

    pub fn save_department(
        &mut self,
        name: &str,
        address: &str,
        phone: &str,
        website: &str,
    ) -> Result<PoliceDepartment> {
        let created = self
            .backend
            .save_police_department(name, address, phone, website)
            .map_err(map_backend_error)?;
        self.personal_departments.invalidate();
        Ok(created)
    }

    pub fn assign_role(&mut self, user: &Principal, role: UserRole) -> Result<()> {
        self.backend
            .assign_user_role(user, role)
            .map_err(map_backend_error)?;
        self.role.invalidate();
        Ok(())
    }

    pub fn verify_department(&mut self, id: DepartmentId) -> Result<()> {
        self.backend
            .verify_police_department(id)
            .map_err(map_backend_error)?;
        self.personal_departments.invalidate();
        self.verified_departments.invalidate();
        Ok(())
    }

    pub fn incidents_cached(&self) -> bool {
        self.incidents.is_cached()
    }

    pub fn evidence_cached(&self) -> bool {
        self.evidence.is_cached()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SnapshotBackend;
    use crate::error::SIGN_IN_PROMPT;
    use anyhow::anyhow;
    use std::cell::Cell;

    fn store() -> ClientStore<SnapshotBackend> {
        ClientStore::new(SnapshotBackend::local("alice"))
    }

    #[test]
    fn reads_are_cached_until_invalidated() {
        let mut store = store();
        store.report_incident("Followed home", "details").expect("report");
        assert!(!store.incidents_cached());

        assert_eq!(store.incidents().expect("read").len(), 1);
        assert!(store.incidents_cached());

        store.report_incident("Calls", "details").expect("report");
        assert!(!store.incidents_cached());
        assert_eq!(store.incidents().expect("read").len(), 2);
    }

    #[test]
    fn upload_invalidates_evidence_and_incidents() {
        let mut store = store();
        let incident = store.report_incident("Followed", "").expect("report");
        store.incidents().expect("prime incidents");
        store.evidence().expect("prime evidence");

        let mut on_progress = |_pct: f64| {};
        store
            .upload_evidence(
                "Photo",
                "",
                EvidenceKind::Photo,
                BlobHandle::from_url("https://files.example/1"),
                incident.id,
                &mut on_progress,
            )
            .expect("upload");

        assert!(!store.evidence_cached());
        assert!(!store.incidents_cached());
        assert_eq!(store.evidence().expect("read").len(), 1);
        assert_eq!(store.incidents().expect("read")[0].evidence_ids.len(), 1);
    }

    #[test]
    fn unauthenticated_mutation_surfaces_friendly_message() {
        let mut store = ClientStore::new(SnapshotBackend::anonymous());
        let err = store.report_incident("t", "d").expect_err("must fail");
        assert!(err.to_string().contains(SIGN_IN_PROMPT));
    }

    #[test]
    fn failed_read_is_retried_exactly_once() {
        let attempts = Cell::new(0u32);
        let mut slot: QuerySlot<u32> = QuerySlot::default();

        let value = slot
            .get_or_fetch("flaky", || {
                attempts.set(attempts.get() + 1);
                if attempts.get() == 1 {
                    Err(anyhow!("transient"))
                } else {
                    Ok(7)
                }
            })
            .copied()
            .expect("second attempt succeeds");
        assert_eq!(value, 7);
        assert_eq!(attempts.get(), 2);
    }

    #[test]
    fn read_fails_for_good_on_second_failure() {
        let attempts = Cell::new(0u32);
        let mut slot: QuerySlot<u32> = QuerySlot::default();

        let err = slot
            .get_or_fetch("down", || {
                attempts.set(attempts.get() + 1);
                Err(anyhow!("backend down"))
            })
            .map(|_| ())
            .expect_err("must fail");
        assert_eq!(attempts.get(), 2);
        assert!(err.to_string().contains("backend down"));
        assert!(!slot.is_cached());
        assert!(!slot.is_loading());
    }

    #[test]
    fn settings_round_trip_through_store() {
        let mut store = store();
        assert!(store.settings().expect("read").is_none());

        store
            .save_settings(UserSettings::default())
            .expect("save settings");
        let settings = store.settings().expect("read").expect("present");
        assert_eq!(settings.language, "en");
    }

    #[test]
    fn victim_info_can_be_reset_to_empty() {
        let mut store = store();
        let info = VictimSurvivorInfo {
            name: Some("A".to_string()),
            ..VictimSurvivorInfo::default()
        };
        store.save_victim_info(info).expect("save");
        assert!(!store.victim_info().expect("read").expect("present").is_empty());

        store
            .save_victim_info(VictimSurvivorInfo::default())
            .expect("reset");
        assert!(store.victim_info().expect("read").expect("present").is_empty());
    }

    #[test]
    fn oversized_upload_is_rejected_before_reaching_backend() {
        let mut store = store();
        let incident = store.report_incident("Followed", "").expect("report");
        let blob = BlobHandle::from_bytes(vec![0u8; 50 * 1024 * 1024 + 1]);

        let mut on_progress = |_pct: f64| {};
        let err = store
            .upload_evidence("Big", "", EvidenceKind::Video, blob, incident.id, &mut on_progress)
            .expect_err("must fail");
        assert!(err.to_string().contains("File size exceeds 50MB limit"));
        assert!(store.evidence().expect("read").is_empty());
    }

    #[test]
    fn profile_and_stalker_records_round_trip() {
        let mut store = store();
        assert!(store.profile().expect("read").is_none());

        store
            .save_profile(UserProfile {
                name: "Alice".to_string(),
            })
            .expect("save profile");
        let profile = store.profile().expect("read").expect("present");
        assert_eq!(profile.name, "Alice");

        store
            .save_stalker_profile("J. Doe", "Neighbor", "Drives a grey sedan")
            .expect("save stalker profile");
        assert_eq!(store.stalker_profiles().expect("read").len(), 1);
        assert!(store.personal_departments().expect("read").is_empty());
    }

    #[test]
    fn role_cache_is_invalidated_by_assignment() {
        let backend = SnapshotBackend::local("root").with_role(UserRole::Admin);
        let mut store = ClientStore::new(backend);
        assert_eq!(store.role().expect("read"), UserRole::Admin);

        store
            .assign_role(&Principal::new("someone-else"), UserRole::User)
            .expect("assign");
        assert_eq!(store.role().expect("read"), UserRole::Admin);
    }

    #[test]
    fn admin_mutations_invalidate_department_caches() {
        let backend = SnapshotBackend::local("root").with_role(UserRole::Admin);
        let mut store = ClientStore::new(backend);
        let dept = store
            .save_department("Springfield PD", "742 Evergreen", "555-0100", "")
            .expect("save department");

        store.verified_departments().expect("prime verified");
        store.verify_department(dept.id).expect("verify");
        assert_eq!(store.verified_departments().expect("read").len(), 1);
    }
}
