use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use game_core::{GameState, StatRecord, compute_state_root};
use runtime::repository::Result as RepoResult;
use runtime::{
    FileStateRepository, InMemoryStateRepo, RepositoryError, Runtime, RuntimeConfig,
    RuntimeError, StateRepository,
};

async fn deploy(runtime: &Runtime) {
    let deployer = runtime.handle().connect("deployer");
    deployer.initialize(1000).await.unwrap();
    deployer
        .create_boss("Diablo3", StatRecord::boss(10_000, 200, 10))
        .await
        .unwrap();
    deployer.appoint_ruling_boss("Diablo3").await.unwrap();
}

#[tokio::test]
async fn every_commit_is_stored_and_resumed() {
    let dir = tempfile::tempdir().unwrap();
    let repository = Arc::new(FileStateRepository::new(dir.path()).unwrap());

    let runtime = Runtime::builder()
        .repository(repository.clone())
        .build()
        .await
        .unwrap();
    deploy(&runtime).await;
    let alice = runtime.handle().connect("alice");
    alice.generate_character().await.unwrap();
    let outcome = alice.attack().await.unwrap();
    let before = runtime.handle().query_state().await.unwrap();
    runtime.shutdown().await.unwrap();

    assert_eq!(repository.list_nonces().unwrap(), vec![1, 2, 3, 4, 5]);
    assert!(dir.path().join("state_5.root").exists());

    // A fresh runtime over the same directory picks up where we left off.
    let repository = Arc::new(FileStateRepository::new(dir.path()).unwrap());
    let runtime = Runtime::builder()
        .repository(repository)
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    assert_eq!(handle.query_state().await.unwrap(), before);
    assert_eq!(
        handle.boss_health().await.unwrap(),
        10_000 - outcome.damage
    );
    assert!(handle.is_ruler("Diablo3").await.unwrap());
    assert_eq!(
        handle.character_of("alice").await.unwrap().stats,
        before.characters.character_of(&"alice".into()).unwrap().stats
    );

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn tampered_snapshot_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let repository = FileStateRepository::new(dir.path()).unwrap();

    let mut state = GameState::new();
    game_core::GameEngine::new(&mut state).initialize(1000).unwrap();
    repository.save(state.nonce, &state).unwrap();
    assert_eq!(repository.load(1).unwrap(), Some(state.clone()));

    let expected = hex::encode(compute_state_root(&state).unwrap());
    let stored = std::fs::read_to_string(dir.path().join("state_1.root")).unwrap();
    assert_eq!(stored.trim(), expected);

    std::fs::write(dir.path().join("state_1.root"), hex::encode([0u8; 32])).unwrap();
    assert!(matches!(
        repository.load(1),
        Err(RepositoryError::CorruptedData(_))
    ));

    // The runtime refuses to resume from a corrupted snapshot.
    let result = Runtime::builder()
        .repository(Arc::new(repository))
        .build()
        .await;
    assert!(matches!(
        result,
        Err(RuntimeError::Repository(RepositoryError::CorruptedData(_)))
    ));
}

#[tokio::test]
async fn explicit_initial_state_wins_over_repository() {
    let mut stored = GameState::new();
    game_core::GameEngine::new(&mut stored).initialize(50).unwrap();
    let repository = Arc::new(InMemoryStateRepo::with_state(stored));

    let runtime = Runtime::builder()
        .repository(repository)
        .initial_state(GameState::new())
        .build()
        .await
        .unwrap();

    let state = runtime.handle().query_state().await.unwrap();
    assert!(!state.is_initialized());

    runtime.shutdown().await.unwrap();
}

/// In-memory repository whose writes can be switched off.
struct FlakyRepository {
    inner: InMemoryStateRepo,
    failing: AtomicBool,
}

impl StateRepository for FlakyRepository {
    fn save(&self, nonce: u64, state: &GameState) -> RepoResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::Io(std::io::Error::other("disk full")));
        }
        self.inner.save(nonce, state)
    }

    fn load(&self, nonce: u64) -> RepoResult<Option<GameState>> {
        self.inner.load(nonce)
    }

    fn exists(&self, nonce: u64) -> bool {
        self.inner.exists(nonce)
    }

    fn delete(&self, nonce: u64) -> RepoResult<()> {
        self.inner.delete(nonce)
    }

    fn list_nonces(&self) -> RepoResult<Vec<u64>> {
        self.inner.list_nonces()
    }
}

#[tokio::test]
async fn failed_save_rolls_the_call_back() {
    let repository = Arc::new(FlakyRepository {
        inner: InMemoryStateRepo::new(),
        failing: AtomicBool::new(false),
    });
    let runtime = Runtime::builder()
        .repository(repository.clone())
        .build()
        .await
        .unwrap();
    deploy(&runtime).await;

    let alice = runtime.handle().connect("alice");
    alice.generate_character().await.unwrap();
    let before = runtime.handle().query_state().await.unwrap();

    repository.failing.store(true, Ordering::SeqCst);
    let err = alice.attack().await.unwrap_err();
    assert!(matches!(err, RuntimeError::Repository(RepositoryError::Io(_))));
    assert_eq!(err.kind(), None);
    assert_eq!(runtime.handle().query_state().await.unwrap(), before);

    repository.failing.store(false, Ordering::SeqCst);
    let outcome = alice.attack().await.unwrap();
    assert_eq!(outcome.health_before, 10_000);
    assert_eq!(repository.list_nonces().unwrap().last(), Some(&5));

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn old_snapshots_are_pruned_after_commit() {
    let dir = tempfile::tempdir().unwrap();
    let repository = Arc::new(FileStateRepository::new(dir.path()).unwrap());
    let config = RuntimeConfig {
        snapshot_retention: Some(2),
        ..RuntimeConfig::default()
    };

    let runtime = Runtime::builder()
        .config(config)
        .repository(repository.clone())
        .build()
        .await
        .unwrap();
    deploy(&runtime).await;
    let alice = runtime.handle().connect("alice");
    alice.generate_character().await.unwrap();
    alice.attack().await.unwrap();
    let committed = runtime.handle().query_state().await.unwrap();
    runtime.shutdown().await.unwrap();

    assert_eq!(repository.list_nonces().unwrap(), vec![4, 5]);
    assert!(!dir.path().join("state_1.root").exists());
    assert_eq!(repository.latest().unwrap(), Some(committed));
}

#[tokio::test]
async fn committed_state_survives_json() {
    let runtime = Runtime::builder().build().await.unwrap();
    deploy(&runtime).await;
    runtime
        .handle()
        .connect("alice")
        .generate_character()
        .await
        .unwrap();
    let state = runtime.handle().query_state().await.unwrap();
    runtime.shutdown().await.unwrap();

    let json = serde_json::to_string(&state).unwrap();
    let decoded: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, state);
    assert_eq!(
        compute_state_root(&decoded).unwrap(),
        compute_state_root(&state).unwrap()
    );
}
