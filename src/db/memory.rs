//! In-memory `EntityStore` implementation.

use std::collections::{BTreeSet, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::db::traits::EntityStore;
use crate::models::{Medico, Paciente};
use crate::{Error, Result};

#[derive(Debug, Default)]
struct Inner {
    medicos: HashMap<i64, Medico>,
    /// dni -> medico id, kept in lockstep with `medicos`.
    medicos_by_dni: HashMap<String, i64>,
    pacientes: HashMap<i64, Paciente>,
    /// medico id -> ids of its patients. The relationship index; entries may
    /// outlive the doctor record itself (a dangling reference is legal when
    /// the lenient integrity mode deleted the doctor).
    pacientes_by_medico: HashMap<i64, BTreeSet<i64>>,
}

/// In-memory store backing the registry.
///
/// All collections live behind a single `RwLock`, so every mutation that
/// touches multiple indexes happens in one critical section. The lock is
/// never held across an await point.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| Error::Internal("entity store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| Error::Internal("entity store lock poisoned".to_string()))
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn insert_medico(&self, medico: Medico) -> Result<()> {
        let mut inner = self.write()?;

        if inner.medicos.contains_key(&medico.id) {
            return Err(Error::Conflict(format!(
                "medico {} already exists",
                medico.id
            )));
        }
        if let Some(holder) = inner.medicos_by_dni.get(&medico.dni) {
            return Err(Error::Conflict(format!(
                "dni '{}' is already registered to medico {holder}",
                medico.dni
            )));
        }

        inner.medicos_by_dni.insert(medico.dni.clone(), medico.id);
        inner.medicos.insert(medico.id, medico);
        Ok(())
    }

    async fn get_medico(&self, id: i64) -> Result<Option<Medico>> {
        Ok(self.read()?.medicos.get(&id).cloned())
    }

    async fn get_medico_by_dni(&self, dni: &str) -> Result<Option<Medico>> {
        let inner = self.read()?;
        let id = match inner.medicos_by_dni.get(dni) {
            Some(id) => *id,
            None => return Ok(None),
        };
        Ok(inner.medicos.get(&id).cloned())
    }

    async fn update_medico(&self, medico: Medico) -> Result<bool> {
        let mut inner = self.write()?;

        let old_dni = match inner.medicos.get(&medico.id) {
            Some(existing) => existing.dni.clone(),
            None => return Ok(false),
        };

        if old_dni != medico.dni {
            if let Some(holder) = inner.medicos_by_dni.get(&medico.dni) {
                return Err(Error::Conflict(format!(
                    "dni '{}' is already registered to medico {holder}",
                    medico.dni
                )));
            }
            inner.medicos_by_dni.remove(&old_dni);
            inner.medicos_by_dni.insert(medico.dni.clone(), medico.id);
        }

        inner.medicos.insert(medico.id, medico);
        Ok(true)
    }

    async fn delete_medico(&self, id: i64) -> Result<bool> {
        let mut inner = self.write()?;
        match inner.medicos.remove(&id) {
            Some(medico) => {
                inner.medicos_by_dni.remove(&medico.dni);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn medico_exists(&self, id: i64) -> Result<bool> {
        Ok(self.read()?.medicos.contains_key(&id))
    }

    async fn insert_paciente(&self, paciente: Paciente) -> Result<()> {
        let mut inner = self.write()?;

        if inner.pacientes.contains_key(&paciente.id) {
            return Err(Error::Conflict(format!(
                "paciente {} already exists",
                paciente.id
            )));
        }

        inner
            .pacientes_by_medico
            .entry(paciente.medico_id())
            .or_default()
            .insert(paciente.id);
        inner.pacientes.insert(paciente.id, paciente);
        Ok(())
    }

    async fn get_paciente(&self, id: i64) -> Result<Option<Paciente>> {
        Ok(self.read()?.pacientes.get(&id).cloned())
    }

    async fn list_pacientes_by_medico(&self, medico_id: i64) -> Result<Vec<Paciente>> {
        let inner = self.read()?;
        let ids = match inner.pacientes_by_medico.get(&medico_id) {
            Some(ids) => ids,
            None => return Ok(Vec::new()),
        };
        Ok(ids
            .iter()
            .filter_map(|id| inner.pacientes.get(id).cloned())
            .collect())
    }

    async fn update_paciente(&self, paciente: Paciente) -> Result<bool> {
        let mut inner = self.write()?;

        let old_medico_id = match inner.pacientes.get(&paciente.id) {
            Some(existing) => existing.medico_id(),
            None => return Ok(false),
        };

        let new_medico_id = paciente.medico_id();
        if old_medico_id != new_medico_id {
            let now_empty = match inner.pacientes_by_medico.get_mut(&old_medico_id) {
                Some(ids) => {
                    ids.remove(&paciente.id);
                    ids.is_empty()
                }
                None => false,
            };
            if now_empty {
                inner.pacientes_by_medico.remove(&old_medico_id);
            }
            inner
                .pacientes_by_medico
                .entry(new_medico_id)
                .or_default()
                .insert(paciente.id);
        }

        inner.pacientes.insert(paciente.id, paciente);
        Ok(true)
    }

    async fn delete_paciente(&self, id: i64) -> Result<bool> {
        let mut inner = self.write()?;

        let paciente = match inner.pacientes.remove(&id) {
            Some(p) => p,
            None => return Ok(false),
        };

        let medico_id = paciente.medico_id();
        let now_empty = match inner.pacientes_by_medico.get_mut(&medico_id) {
            Some(ids) => {
                ids.remove(&id);
                ids.is_empty()
            }
            None => false,
        };
        if now_empty {
            inner.pacientes_by_medico.remove(&medico_id);
        }
        Ok(true)
    }

    async fn paciente_count_for_medico(&self, medico_id: i64) -> Result<usize> {
        let inner = self.read()?;
        Ok(inner
            .pacientes_by_medico
            .get(&medico_id)
            .map(|ids| ids.len())
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medico(id: i64, dni: &str) -> Medico {
        Medico {
            id,
            nombre: format!("Medico {id}"),
            dni: dni.to_string(),
            especialidad: "Cardiologia".to_string(),
        }
    }

    fn paciente(id: i64, medico: &Medico) -> Paciente {
        Paciente {
            id,
            nombre: format!("Paciente {id}"),
            dni: format!("p-{id}"),
            edad: 40,
            medico: medico.clone(),
        }
    }

    #[tokio::test]
    async fn duplicate_medico_id_and_dni_conflict() {
        let store = MemoryStore::new();
        store.insert_medico(medico(1, "123")).await.unwrap();

        let err = store.insert_medico(medico(1, "456")).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));

        let err = store.insert_medico(medico(2, "123")).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[tokio::test]
    async fn dni_index_follows_medico_update() {
        let store = MemoryStore::new();
        store.insert_medico(medico(1, "123")).await.unwrap();

        let mut updated = medico(1, "999");
        updated.especialidad = "Traumatologia".to_string();
        assert!(store.update_medico(updated).await.unwrap());

        assert!(store.get_medico_by_dni("123").await.unwrap().is_none());
        let found = store.get_medico_by_dni("999").await.unwrap().unwrap();
        assert_eq!(found.id, 1);
        assert_eq!(found.especialidad, "Traumatologia");
    }

    #[tokio::test]
    async fn deleting_paciente_clears_both_indexes() {
        let store = MemoryStore::new();
        let m = medico(1, "122");
        store.insert_medico(m.clone()).await.unwrap();
        store.insert_paciente(paciente(1, &m)).await.unwrap();

        assert!(store.delete_paciente(1).await.unwrap());

        assert!(store.get_paciente(1).await.unwrap().is_none());
        assert!(store.list_pacientes_by_medico(1).await.unwrap().is_empty());
        assert_eq!(store.paciente_count_for_medico(1).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn updating_paciente_moves_it_between_doctors() {
        let store = MemoryStore::new();
        let m1 = medico(1, "122");
        let m2 = medico(2, "133");
        store.insert_medico(m1.clone()).await.unwrap();
        store.insert_medico(m2.clone()).await.unwrap();
        store.insert_paciente(paciente(1, &m1)).await.unwrap();

        let mut moved = paciente(1, &m2);
        moved.nombre = "Paciente 1".to_string();
        assert!(store.update_paciente(moved).await.unwrap());

        assert!(store.list_pacientes_by_medico(1).await.unwrap().is_empty());
        let listed = store.list_pacientes_by_medico(2).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, 1);
    }

    #[tokio::test]
    async fn list_for_unknown_medico_is_empty() {
        let store = MemoryStore::new();
        assert!(store.list_pacientes_by_medico(7).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_medico_leaves_patients_in_place() {
        let store = MemoryStore::new();
        let m = medico(1, "122");
        store.insert_medico(m.clone()).await.unwrap();
        store.insert_paciente(paciente(1, &m)).await.unwrap();

        assert!(store.delete_medico(1).await.unwrap());

        assert!(store.get_paciente(1).await.unwrap().is_some());
        assert_eq!(store.list_pacientes_by_medico(1).await.unwrap().len(), 1);
    }
}
