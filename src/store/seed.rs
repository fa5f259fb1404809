//! Sample articles seeded into the store at process start

use chrono::{Duration, Utc};

use super::{ContentStore, NewPost};

fn tags(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

/// Seed the fixed sample set, staggering publication dates so listings have
/// a deterministic order
pub(super) fn populate(store: &mut ContentStore) {
    let now = Utc::now();
    for (i, post) in sample_posts().into_iter().enumerate() {
        store.create_post_at(post, now - Duration::days(1 + 4 * i as i64));
    }
}

fn sample_posts() -> Vec<NewPost> {
    vec![
        NewPost {
            title: "Breaking the 100B Parameter Barrier: Efficient Training Strategies for Ultra-Large Language Models".to_string(),
            excerpt: "How we reduced training costs by 70% on 175B parameter models with gradient checkpointing, mixed-precision training, and layered parallelism.".to_string(),
            content: r"## The Scale of Modern AI Training

![100 Billion Parameter Training](/attached_assets/training-cluster.png)

Models like **GPT-3** (175 billion parameters) and **PaLM** (540 billion) showed that scale unlocks few-shot learning and multi-step reasoning. A dense 100B-parameter transformer needs roughly 200 GB of memory just for weights in half precision, and far more once optimizer states and activations join in.

## Gradient Checkpointing

Instead of storing every intermediate activation for the backward pass, save a handful of checkpoints and recompute the rest on demand. Activation memory drops from linear in depth to roughly its square root.

- **Memory**: order-of-magnitude savings on deep networks
- **Cost**: around 20-30% extra compute per step
- **Payoff**: layers that previously could not fit now train routinely

## Mixed-Precision Training

Most tensor math runs in FP16 or bfloat16 on tensor cores, while a master copy of the weights stays in FP32 and loss scaling prevents gradient underflow. Throughput nearly doubles against full FP32 in our benchmarks.

## Layered Parallelism

- **Data parallelism**: replicate the model, shard the batch
- **Tensor parallelism**: shard the weight matrices themselves
- **Pipeline parallelism**: cut the layer stack into scheduled stages

Production runs combine all three. The result for our clients: a 70% reduction in training cost at unchanged model quality.".to_string(),
            author: "Maya Tran".to_string(),
            category: "LLM Research".to_string(),
            tags: tags(&["LLM", "Training Optimization", "Deep Learning", "Distributed Computing", "Cost Reduction"]),
            featured: true,
        },
        NewPost {
            title: "From GPT to Production: Building a Multi-Billion Dollar AI Platform at Scale".to_string(),
            excerpt: "How we scaled an enterprise AI platform to 5 billion tokens a day with 99.9% uptime and sub-second latency.".to_string(),
            content: r"![Platform architecture](/attached_assets/platform-architecture.png)

Taking a GPT-based prototype to a platform serving thousands of concurrent users is a business-critical engineering problem, not a lab exercise.

## Results at a Glance

- **Real-time speed**: response latency cut from seconds to sub-second
- **Cost efficiency**: more users served per dollar as usage grew 10x
- **Reliability**: 99.9%+ uptime across mission-critical services

## Architecture Built for Growth

We split inference, data processing, and orchestration into containerized microservices behind an API gateway, with load balancing across replicas and an aggressive caching layer in front of the model fleet.

## Performance Work That Paid Off

- Distillation and quantization for faster inference
- Token streaming so users see answers immediately
- Geo-distributed deployment close to major user bases

## Cost Discipline

Resource scaling follows demand, small models field the easy queries, and spot capacity absorbs the baseline. Cost per transaction fell even as traffic grew an order of magnitude.".to_string(),
            author: "Maya Tran".to_string(),
            category: "Case Study".to_string(),
            tags: tags(&["Enterprise AI", "Platform Engineering", "Scalability", "Production Systems", "MLOps"]),
            featured: true,
        },
        NewPost {
            title: "The Rise of Specialized Small Language Models: Why Bigger Isn't Always Better".to_string(),
            excerpt: "Specialized 7B parameter models can outperform much larger generalists on domain tasks while running on edge devices.".to_string(),
            content: r"The obsession with sheer model size is giving way to a more nuanced view: small, specialized models often beat their larger counterparts on the tasks that matter.

![Large vs small models](/attached_assets/slm-comparison.png)

## The Efficiency Revolution

- **Competitive performance**: a well-tuned 7B model matches a 70B generalist on its own domain
- **Consumer hardware**: runs on a laptop or a single GPU, no server fleet required
- **Lower costs**: inference costs drop by 99% against large hosted models
- **Privacy**: sensitive data never leaves the device

## What Makes It Work

### Knowledge Distillation

A large teacher model guides a compact student to reproduce its behavior on the target domain, shrinking the network while keeping the expertise.

### Low-Rank Adaptation

Adapter matrices touch about 1% of the weights yet reach full fine-tuning accuracy, so a new domain ships overnight on one GPU.

## Where This Lands

Most everyday workloads simply do not need a frontier-scale model. We expect specialized small models to become the default deployment choice, with the giants reserved for open-ended reasoning.".to_string(),
            author: "Maya Tran".to_string(),
            category: "AI Trends".to_string(),
            tags: tags(&["SLM", "Edge AI", "Model Efficiency", "Specialized Models", "Future of AI"]),
            featured: true,
        },
        NewPost {
            title: "Attention Is All You Need, But Speed Is What You Want: Optimizing Transformers for Production".to_string(),
            excerpt: "Kernel fusion, dynamic sparsity, and a faster attention implementation delivered a 10x speedup in transformer inference.".to_string(),
            content: r"Production deployment of transformer models requires careful optimization to meet latency and throughput targets.

## The Performance Challenge

- Quadratic complexity in sequence length
- Memory bandwidth bottlenecks
- Poor GPU utilization in naive implementations

## Our Optimization Stack

### Fused Attention

A tiled attention kernel with linear memory usage runs 3x faster than the standard implementation.

### Dynamic Sparsity

Learned sparsity patterns eliminate 70% of the computation with no measurable accuracy loss.

### Kernel Fusion

Fusing adjacent operations cuts memory transfers by 40% and doubles throughput on modern GPU architectures.

## Results

- 10x improvement in inference speed
- 5x reduction in infrastructure cost
- Real-time applications that were previously impossible".to_string(),
            author: "Maya Tran".to_string(),
            category: "LLM Research".to_string(),
            tags: tags(&["Transformers", "Optimization", "CUDA", "Production", "Performance"]),
            featured: false,
        },
        NewPost {
            title: "Conversational AI That Actually Converses: Building Context-Aware Dialog Systems".to_string(),
            excerpt: "Moving beyond simple chatbots to systems that keep context, track goals, and hold coherent multi-turn conversations.".to_string(),
            content: r"True conversational AI needs memory, context awareness, and the ability to hold a coherent dialog over long interactions.

## The Context Problem

Most chatbots forget previous messages, lose track of the user's goal, and stumble over pronouns and references.

## Hierarchical Context Management

- **Working memory**: the last handful of turns
- **Episode memory**: the current session
- **Long-term memory**: user history and preferences

A dynamic context window prioritizes what matters and keeps the token budget under control.

## Case Study: Support Bot

- 85% of issues resolved without human handoff
- 4.8/5 user satisfaction across twelve-turn conversations on average
- Context switches handled without losing the thread".to_string(),
            author: "Maya Tran".to_string(),
            category: "NLP Insights".to_string(),
            tags: tags(&["Conversational AI", "Dialog Systems", "NLU", "Context Management", "Chatbots"]),
            featured: false,
        },
        NewPost {
            title: "Multilingual NLP at Scale: Processing 100+ Languages with a Single Model".to_string(),
            excerpt: "A unified multilingual system handling over 100 languages, enabling global deployment from one model.".to_string(),
            content: r"Serving a global audience means handling linguistic diversity at scale. Our platform processes more than 100 languages with one unified model.

## The Multilingual Challenge

- Severe resource imbalance across languages
- Script and morphological diversity
- Code-switching inside a single sentence

## A Unified Architecture

Byte-level tokenization with language-specific adaptations feeds a shared encoder; lightweight per-language adapters give zero-shot transfer to languages the model never saw in fine-tuning.

## Impact

- Deployed in 50+ countries
- Low-resource languages supported with under a million training examples
- Real-time translation for hundreds of millions of users".to_string(),
            author: "Maya Tran".to_string(),
            category: "NLP Insights".to_string(),
            tags: tags(&["Multilingual NLP", "Cross-lingual", "Global AI", "Low-resource Languages"]),
            featured: false,
        },
        NewPost {
            title: "RAG Systems That Actually Work: Combining Retrieval and Generation for Enterprise AI".to_string(),
            excerpt: "Retrieval-augmented generation keeps AI grounded in facts. Here is how we built a RAG system over 10TB of enterprise documents.".to_string(),
            content: r"RAG systems combine the best of retrieval and generation, but building them at scale means solving real engineering problems.

## Why RAG?

- Hallucination reduced by 90%
- Answers stay current without retraining
- Every claim carries a source attribution

## The Pipeline

### Document Processing

Multi-format ingestion with table extraction and hierarchical chunking with overlap.

### Retrieval

Hybrid search combining dense, sparse, and graph signals, re-ranked by cross-encoders.

### Generation

Dynamic context window management with confidence scoring and factual consistency checks.

## Results

- 10TB document corpus indexed
- 50ms end-to-end latency
- 96% factual accuracy under audit

**Lesson learned**: retrieval quality matters more than model size.".to_string(),
            author: "Maya Tran".to_string(),
            category: "LLM Research".to_string(),
            tags: tags(&["RAG", "Information Retrieval", "Enterprise AI", "Vector Search", "Knowledge Management"]),
            featured: false,
        },
    ]
}
