use std::path::{Path, PathBuf};
use std::thread;

use log::{debug, info};

use crate::config::PoolConfig;
use crate::error::AnalysisError;
use crate::report_for;

/// Liste les entrées `*.flac` d'un répertoire, triées lexicographiquement.
///
/// Mêmes règles qu'un glob `*.flac` : correspondance sensible à la casse
/// (`A.FLAC` est ignoré) et aucun filtrage sur le type d'entrée — un
/// répertoire nommé `x.flac` est retenu et produira sa propre ligne
/// d'erreur à l'analyse.
pub fn discover_flac_files(dir: &Path) -> Result<Vec<PathBuf>, AnalysisError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "flac") {
            // Dans le répertoire courant, on rapporte le nom nu plutôt
            // que « ./nom ».
            match path.strip_prefix("./") {
                Ok(bare) => files.push(bare.to_path_buf()),
                Err(_) => files.push(path),
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Analyse un lot de fichiers sur un pool de workers de taille fixe.
///
/// Chaque fichier est étiqueté de son indice d'origine, le lot est découpé
/// en paquets de `chunksize` fichiers poussés dans une file partagée, et
/// exactement `workers` threads la vident. Les paires (indice, rapport)
/// sont réassemblées par indice avant le retour : l'ordre de sortie est
/// celui de la liste d'entrée, quel que soit l'ordonnancement des workers.
pub fn run_batch(files: &[PathBuf], pool: &PoolConfig) -> Result<Vec<String>, AnalysisError> {
    info!(
        "dispatching {} files to {} workers (chunksize {})",
        files.len(),
        pool.workers,
        pool.chunksize
    );

    let tagged: Vec<(usize, PathBuf)> = files.iter().cloned().enumerate().collect();

    let (work_tx, work_rx) = crossbeam_channel::unbounded::<Vec<(usize, PathBuf)>>();
    for batch in tagged.chunks(pool.chunksize) {
        // Le récepteur est encore vivant ici, l'envoi ne peut pas échouer.
        let _ = work_tx.send(batch.to_vec());
    }
    drop(work_tx);

    let mut collected: Vec<(usize, String)> = thread::scope(|scope| {
        let handles: Vec<_> = (0..pool.workers)
            .map(|worker_id| {
                let work_rx = work_rx.clone();
                scope.spawn(move || {
                    let mut done = Vec::new();
                    while let Ok(batch) = work_rx.recv() {
                        debug!("worker {worker_id}: batch of {} files", batch.len());
                        for (index, path) in batch {
                            done.push((index, report_for(&path)));
                        }
                    }
                    done
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().map_err(|_| AnalysisError::Worker))
            .collect::<Result<Vec<_>, _>>()
    })?
    .into_iter()
    .flatten()
    .collect();

    collected.sort_by_key(|(index, _)| *index);
    Ok(collected.into_iter().map(|(_, report)| report).collect())
}
