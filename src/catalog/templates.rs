//! Fixed code templates served by the `get-template` tool.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TcaMcpError;

/// The closed set of template names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    Counter,
    ApiCall,
    List,
    Timer,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [Self::Counter, Self::ApiCall, Self::List, Self::Timer];

    /// Wire name used in tool arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Counter => "counter",
            Self::ApiCall => "api-call",
            Self::List => "list",
            Self::Timer => "timer",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = TcaMcpError;

    /// Exact match only; `"Counter"` is not `"counter"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| TcaMcpError::template_not_found(s))
    }
}

/// A template record. `code` is returned verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub key: TemplateKind,
    pub description: &'static str,
    pub code: &'static str,
}

pub(crate) static TEMPLATES: &[Template] = &[
    Template {
        key: TemplateKind::Counter,
        description: "Basic counter feature with increment and decrement actions",
        code: COUNTER,
    },
    Template {
        key: TemplateKind::ApiCall,
        description: "Feature that loads data from an API client with loading and error state",
        code: API_CALL,
    },
    Template {
        key: TemplateKind::List,
        description: "Identified list of items with add and delete actions",
        code: LIST,
    },
    Template {
        key: TemplateKind::Timer,
        description: "Cancellable timer driven by the continuous clock dependency",
        code: TIMER,
    },
];

const COUNTER: &str = r#"import ComposableArchitecture
import SwiftUI

@Reducer
struct CounterFeature {
  @ObservableState
  struct State: Equatable {
    var count = 0
  }

  enum Action {
    case decrementButtonTapped
    case incrementButtonTapped
    case resetButtonTapped
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

      case .resetButtonTapped:
        state.count = 0
        return .none
      }
    }
  }
}

struct CounterView: View {
  let store: StoreOf<CounterFeature>

  var body: some View {
    VStack {
      Text("\(store.count)")
        .font(.largeTitle)
      HStack {
        Button("-") { store.send(.decrementButtonTapped) }
        Button("Reset") { store.send(.resetButtonTapped) }
        Button("+") { store.send(.incrementButtonTapped) }
      }
    }
  }
}
"#;

const API_CALL: &str = r#"import ComposableArchitecture
import SwiftUI

@DependencyClient
struct ItemsClient {
  var fetch: @Sendable () async throws -> [String]
}

extension ItemsClient: TestDependencyKey {
  static let testValue = Self()
}

extension DependencyValues {
  var itemsClient: ItemsClient {
    get { self[ItemsClient.self] }
    set { self[ItemsClient.self] = newValue }
  }
}

@Reducer
struct ItemsFeature {
  @ObservableState
  struct State: Equatable {
    var items: [String] = []
    var isLoading = false
    var errorMessage: String?
  }

  enum Action {
    case loadButtonTapped
    case itemsResponse(Result<[String], Error>)
  }

  @Dependency(\.itemsClient) var itemsClient

  var body: some ReducerOf<Self> {
    Reduce { state, action in
      switch action {
      case .loadButtonTapped:
        state.isLoading = true
        state.errorMessage = nil
        return .run { send in
          await send(.itemsResponse(Result { try await itemsClient.fetch() }))
        }

      case let .itemsResponse(.success(items)):
        state.isLoading = false
        state.items = items
        return .none

      case let .itemsResponse(.failure(error)):
        state.isLoading = false
        state.errorMessage = error.localizedDescription
        return .none
      }
    }
  }
}
"#;

const LIST: &str = r#"import ComposableArchitecture
import SwiftUI

struct Item: Equatable, Identifiable {
  let id: UUID
  var title: String
}

@Reducer
struct ListFeature {
  @ObservableState
  struct State: Equatable {
    var items: IdentifiedArrayOf<Item> = []
  }

  enum Action {
    case addButtonTapped
    case delete(IndexSet)
  }

  @Dependency(\.uuid) var uuid

  var body: some ReducerOf<Self> {
    Reduce { state, action in
      switch action {
      case .addButtonTapped:
        state.items.append(Item(id: uuid(), title: "Item \(state.items.count + 1)"))
        return .none

      case let .delete(offsets):
        state.items.remove(atOffsets: offsets)
        return .none
      }
    }
  }
}

struct ListFeatureView: View {
  let store: StoreOf<ListFeature>

  var body: some View {
    List {
      ForEach(store.items) { item in
        Text(item.title)
      }
      .onDelete { store.send(.delete($0)) }
    }
    .toolbar {
      Button("Add") { store.send(.addButtonTapped) }
    }
  }
}
"#;

const TIMER: &str = r#"import ComposableArchitecture
import SwiftUI

@Reducer
struct TimerFeature {
  @ObservableState
  struct State: Equatable {
    var isRunning = false
    var secondsElapsed = 0
  }

  enum Action {
    case startButtonTapped
    case stopButtonTapped
    case timerTicked
  }

  enum CancelID { case timer }

  @Dependency(\.continuousClock) var clock

  var body: some ReducerOf<Self> {
    Reduce { state, action in
      switch action {
      case .startButtonTapped:
        state.isRunning = true
        return .run { send in
          for await _ in clock.timer(interval: .seconds(1)) {
            await send(.timerTicked)
          }
        }
        .cancellable(id: CancelID.timer, cancelInFlight: true)

      case .stopButtonTapped:
        state.isRunning = false
        return .cancel(id: CancelID.timer)

      case .timerTicked:
        state.secondsElapsed += 1
        return .none
      }
    }
  }
}
"#;
