//! Documentation bodies served as `tca://docs/<key>` resources.
//!
//! Declaration order is the listing order.

use super::DocumentationEntry;

pub(crate) static DOCS: &[DocumentationEntry] = &[
    DocumentationEntry {
        key: "getting-started",
        title: "Getting Started with TCA",
        description: "Install the library and build a first feature with a reducer and a store.",
        content: r#"# Getting Started

The Composable Architecture (TCA) builds an application out of features.
Each feature is a reducer that owns a `State` type and an `Action` type,
and a view that observes a `Store` of that feature.

## Installation

Add the package to `Package.swift`:

```swift
.package(url: "https://github.com/pointfreeco/swift-composable-architecture", from: "1.0.0")
```

## A first feature

```swift
import ComposableArchitecture

@Reducer
struct CounterFeature {
  @ObservableState
  struct State: Equatable {
    var count = 0
  }

  enum Action {
    case decrementButtonTapped
    case incrementButtonTapped
  }

  var body: some ReducerOf<Self> {
    Reduce { state, action in
      switch action {
      case .decrementButtonTapped:
        state.count -= 1
        return .none
      case .incrementButtonTapped:
        state.count += 1
        return .none
      }
    }
  }
}
```

## Driving a view

```swift
struct CounterView: View {
  let store: StoreOf<CounterFeature>

  var body: some View {
    HStack {
      Button("-") { store.send(.decrementButtonTapped) }
      Text("\(store.count)")
      Button("+") { store.send(.incrementButtonTapped) }
    }
  }
}
```

Create the store once, at the root of the app:

```swift
CounterView(store: Store(initialState: CounterFeature.State()) { CounterFeature() })
```
"#,
    },
    DocumentationEntry {
        key: "reducers",
        title: "Reducers",
        description: "Define state, actions and the reducer body with the @Reducer macro.",
        content: r#"# Reducers

A reducer is a pure function `(inout State, Action) -> Effect<Action>`.
It mutates state in place and returns the effects that should run next.

## The @Reducer macro

Annotate the feature type with `@Reducer`. The macro synthesizes the
`Reducer` conformance, case paths for the `Action` enum and the
observation plumbing for `@ObservableState`.

```swift
@Reducer
struct Feature {
  @ObservableState
  struct State: Equatable { var isLoading = false }
  enum Action { case onAppear }
  var body: some ReducerOf<Self> {
    Reduce { state, action in
      switch action {
      case .onAppear:
        state.isLoading = true
        return .none
      }
    }
  }
}
```

## Rules

- Only the reducer mutates state. Views send actions; effects send actions.
- Return `.none` when there is no work to do.
- Keep `State` `Equatable` so tests can assert on every change.

## Composition

Combine child features with `Scope`:

```swift
var body: some ReducerOf<Self> {
  Scope(state: \.counter, action: \.counter) { CounterFeature() }
  Reduce { state, action in
    // parent logic
    return .none
  }
}
```
"#,
    },
    DocumentationEntry {
        key: "effects",
        title: "Effects",
        description: "Run asynchronous work with .run, feed results back as actions, and cancel long-running effects.",
        content: r#"# Effects

Effects are how a reducer talks to the outside world. An effect performs
asynchronous work and feeds its results back into the system as actions.

## .run

```swift
case .factButtonTapped:
  state.isLoading = true
  return .run { [count = state.count] send in
    let fact = try await numberFact.fetch(count)
    await send(.factResponse(fact))
  }
```

Capture the state you need explicitly. The closure cannot touch `state`;
mutations happen when the response action comes back into the reducer.

## Cancellation

Long-running effects such as timers and async sequences must be
cancellable, otherwise they outlive the feature that started them.

```swift
enum CancelID { case timer }

case .startButtonTapped:
  return .run { send in
    for await _ in clock.timer(interval: .seconds(1)) {
      await send(.timerTicked)
    }
  }
  .cancellable(id: CancelID.timer)

case .stopButtonTapped:
  return .cancel(id: CancelID.timer)
```

## Combining

Use `.merge` to run effects concurrently and `.concatenate` to run them in
order. Prefer a single `.run` with structured concurrency when possible.
"#,
    },
    DocumentationEntry {
        key: "dependencies",
        title: "Dependencies",
        description: "Control clocks, UUIDs, dates and API clients through @Dependency for testability.",
        content: r#"# Dependencies

Anything that reaches outside the feature (network, clocks, random
numbers, dates, UUIDs) should be a dependency so tests can control it.

## Using a dependency

```swift
@Reducer
struct Feature {
  @Dependency(\.continuousClock) var clock
  @Dependency(\.uuid) var uuid
  @Dependency(\.date.now) var now
}
```

Never call `Date()`, `UUID()` or `URLSession.shared` directly from a
reducer or effect.

## Declaring a client

```swift
@DependencyClient
struct NumberFactClient {
  var fetch: @Sendable (Int) async throws -> String
}

extension NumberFactClient: DependencyKey {
  static let liveValue = Self(
    fetch: { number in
      let (data, _) = try await URLSession.shared
        .data(from: URL(string: "http://numbersapi.com/\(number)")!)
      return String(decoding: data, as: UTF8.self)
    }
  )
}

extension DependencyValues {
  var numberFact: NumberFactClient {
    get { self[NumberFactClient.self] }
    set { self[NumberFactClient.self] = newValue }
  }
}
```

The live value is the only place that touches the real network.
"#,
    },
    DocumentationEntry {
        key: "testing",
        title: "Testing with TestStore",
        description: "Exhaustively assert state changes and received actions with TestStore.",
        content: r#"# Testing

`TestStore` runs a feature and forces the test to describe every state
change and every action received from effects.

```swift
@MainActor
func testCounter() async {
  let store = TestStore(initialState: CounterFeature.State()) {
    CounterFeature()
  }

  await store.send(.incrementButtonTapped) {
    $0.count = 1
  }
}
```

## Effects under test

Override dependencies so effects are deterministic:

```swift
let clock = TestClock()
let store = TestStore(initialState: TimerFeature.State()) {
  TimerFeature()
} withDependencies: {
  $0.continuousClock = clock
}

await store.send(.startButtonTapped) { $0.isRunning = true }
await clock.advance(by: .seconds(1))
await store.receive(\.timerTicked) { $0.secondsElapsed = 1 }
await store.send(.stopButtonTapped) { $0.isRunning = false }
```

A test fails if an effect is still running when it ends, which is how
missing cancellation is caught.

## Non-exhaustive tests

Set `store.exhaustivity = .off` for integration-style tests that only
care about a subset of the behavior.
"#,
    },
    DocumentationEntry {
        key: "navigation",
        title: "Navigation",
        description: "Tree-based navigation with @Presents and stack navigation with StackState.",
        content: r#"# Navigation

## Tree-based

Model a sheet, popover or alert as optional child state:

```swift
@ObservableState
struct State: Equatable {
  @Presents var addItem: AddItemFeature.State?
}
enum Action {
  case addItem(PresentationAction<AddItemFeature.Action>)
}
var body: some ReducerOf<Self> {
  Reduce { state, action in ... }
    .ifLet(\.$addItem, action: \.addItem) { AddItemFeature() }
}
```

In the view:

```swift
.sheet(item: $store.scope(state: \.addItem, action: \.addItem)) { store in
  AddItemView(store: store)
}
```

## Stack-based

Use `StackState` and `StackAction` with `NavigationStack(path:)` for
drill-down flows, and `.forEach(\.path, action: \.path)` in the reducer.

## Dismissal

Children dismiss themselves with `@Dependency(\.dismiss)`:

```swift
return .run { _ in await dismiss() }
```
"#,
    },
    DocumentationEntry {
        key: "bindings",
        title: "Bindings",
        description: "Two-way bindings between SwiftUI controls and state with BindableAction.",
        content: r#"# Bindings

Conform the action to `BindableAction` and add `BindingReducer`:

```swift
@Reducer
struct Settings {
  @ObservableState
  struct State: Equatable {
    var isHapticsEnabled = true
    var displayName = ""
  }
  enum Action: BindableAction {
    case binding(BindingAction<State>)
  }
  var body: some ReducerOf<Self> {
    BindingReducer()
    Reduce { state, action in
      switch action {
      case .binding(\.displayName):
        // react to a specific field
        return .none
      case .binding:
        return .none
      }
    }
  }
}
```

In the view, hold the store as `@Bindable`:

```swift
@Bindable var store: StoreOf<Settings>

Toggle("Haptics", isOn: $store.isHapticsEnabled)
TextField("Name", text: $store.displayName)
```
"#,
    },
    DocumentationEntry {
        key: "shared-state",
        title: "Shared State",
        description: "Share and persist state across features with @Shared and persistence strategies.",
        content: r#"# Shared State

`@Shared` lets several features hold a reference to the same value.

```swift
@ObservableState
struct State: Equatable {
  @Shared(.appStorage("isOnboarded")) var isOnboarded = false
  @Shared(.fileStorage(.documentsDirectory.appending(component: "items.json")))
  var items: [Item] = []
  @Shared(.inMemory("session")) var session: Session?
}
```

Mutate shared state through `withLock`:

```swift
state.$items.withLock { $0.append(item) }
```

Tests still assert on shared changes exhaustively, and persistence
strategies are replaced with in-memory storage in test contexts.
"#,
    },
    DocumentationEntry {
        key: "performance",
        title: "Performance",
        description: "Keep actions cheap, avoid high-frequency actions and scope stores carefully.",
        content: r#"# Performance

- Do not send actions just to share logic between reducer cases; call a
  helper method on the reducer instead.
- Avoid high-frequency actions (scroll offsets, every timer tick of a
  60 fps animation). Throttle or debounce in the effect.
- Move expensive work into effects so the reducer stays fast; the reducer
  runs on the main thread.
- Scope stores with key paths (`store.scope(state: \.child, action: \.child)`)
  so child views only observe the state they read.
- Use `IdentifiedArrayOf` for collections so element lookups by id are
  constant time.
"#,
    },
];
