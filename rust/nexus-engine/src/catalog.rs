//! Built-in tables the engine generates from: leaderboard seeds, the
//! prompt library and curated news used when harvesting comes up short.

use nexus::{NewsKind, PromptTemplate};

pub struct RankSeed {
    pub name: &'static str,
    pub desc: &'static str,
    pub url: &'static str,
}

pub struct FillerNews {
    pub kind: &'static str,
    pub src: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub url: &'static str,
}

impl FillerNews {
    pub fn kind(&self) -> NewsKind {
        NewsKind::from(self.kind)
    }
}

struct PromptSeed {
    tag: &'static str,
    title: &'static str,
    content: &'static str,
    desc: &'static str,
}

/// Leaderboard seeds in display order, best first.
pub const LEADERBOARD_SEEDS: &[(&str, &[RankSeed])] = &[
    ("LLM", LLM_SEEDS),
    ("Image", IMAGE_SEEDS),
    ("Video", VIDEO_SEEDS),
    ("Dev", DEV_SEEDS),
];

pub fn prompt_library() -> Vec<PromptTemplate> {
    PROMPTS
        .iter()
        .map(|seed| PromptTemplate {
            tag: seed.tag.to_owned(),
            title: seed.title.to_owned(),
            content: seed.content.to_owned(),
            desc: seed.desc.to_owned(),
        })
        .collect()
}

const LLM_SEEDS: &[RankSeed] = &[
    RankSeed {
        name: "ChatGPT (GPT-4o)",
        desc: "OpenAI 旗舰，综合能力全球第一，支持实时语音。",
        url: "https://chat.openai.com",
    },
    RankSeed {
        name: "Claude 3.5 Sonnet",
        desc: "代码编写与逻辑推理能力最强，UI 优雅。",
        url: "https://claude.ai",
    },
    RankSeed {
        name: "DeepSeek-V3",
        desc: "国产开源天花板，数学代码比肩 GPT-4。",
        url: "https://chat.deepseek.com",
    },
    RankSeed {
        name: "Gemini 1.5 Pro",
        desc: "Google 生态核心，超长上下文窗口。",
        url: "https://gemini.google.com",
    },
    RankSeed {
        name: "Kimi 智能助手",
        desc: "月之暗面出品，长文档分析首选，中文极佳。",
        url: "https://kimi.moonshot.cn",
    },
    RankSeed {
        name: "Perplexity",
        desc: "AI 搜索引擎，直接给出精准答案与引用。",
        url: "https://perplexity.ai",
    },
    RankSeed {
        name: "Llama 3.1",
        desc: "Meta 开源巨无霸，当前开源界的最强基石。",
        url: "https://llama.meta.com",
    },
    RankSeed {
        name: "Qwen 2.5",
        desc: "阿里出品，全能型开源模型，多语言能力卓越。",
        url: "https://tongyi.aliyun.com",
    },
    RankSeed {
        name: "Mistral Large",
        desc: "欧洲最强模型，逻辑严密，适合企业部署。",
        url: "https://mistral.ai",
    },
    RankSeed {
        name: "Grok-2",
        desc: "X (推特) 旗下，接入实时社交数据。",
        url: "https://x.ai",
    },
    RankSeed {
        name: "Doubao",
        desc: "字节跳动出品，响应极快，语音流畅。",
        url: "https://www.doubao.com",
    },
    RankSeed {
        name: "GLM-4",
        desc: "智谱 AI 旗舰，工具调用能力强。",
        url: "https://chatglm.cn",
    },
    RankSeed {
        name: "Yi-Large",
        desc: "零一万物出品，全球竞技场前列。",
        url: "https://lingyiwanwu.com",
    },
    RankSeed {
        name: "MiniMax",
        desc: "拟人交互最强，语气最像真人。",
        url: "https://minimaxi.com",
    },
    RankSeed {
        name: "Command R+",
        desc: "专为 RAG (检索增强) 设计的企业模型。",
        url: "https://cohere.com",
    },
    RankSeed {
        name: "Copilot",
        desc: "集成于 Office 的办公助手。",
        url: "https://copilot.microsoft.com",
    },
    RankSeed {
        name: "HuggingChat",
        desc: "免费使用多种开源模型。",
        url: "https://huggingface.co/chat",
    },
    RankSeed {
        name: "Poe",
        desc: "聚合所有主流大模型。",
        url: "https://poe.com",
    },
    RankSeed {
        name: "Ernie",
        desc: "国内知识库覆盖最全。",
        url: "https://yiyan.baidu.com",
    },
    RankSeed {
        name: "Pi",
        desc: "主打高情商陪伴聊天。",
        url: "https://pi.ai",
    },
];

const IMAGE_SEEDS: &[RankSeed] = &[
    RankSeed {
        name: "Midjourney v6",
        desc: "艺术绘图王者，审美无可匹敌。",
        url: "https://midjourney.com",
    },
    RankSeed {
        name: "Flux.1 Pro",
        desc: "最强开源生图，手指/文字渲染极佳。",
        url: "https://blackforestlabs.ai",
    },
    RankSeed {
        name: "Stable Diffusion",
        desc: "本地部署必备，插件生态丰富。",
        url: "https://stability.ai",
    },
    RankSeed {
        name: "DALL·E 3",
        desc: "语义理解最强，集成于 GPT。",
        url: "https://openai.com/dall-e-3",
    },
    RankSeed {
        name: "Civitai",
        desc: "全球最大模型与 LoRA 下载站。",
        url: "https://civitai.com",
    },
    RankSeed {
        name: "LiblibAI",
        desc: "国内最大 AI 绘画社区。",
        url: "https://www.liblib.art",
    },
    RankSeed {
        name: "Leonardo.ai",
        desc: "专注游戏资产生成。",
        url: "https://leonardo.ai",
    },
    RankSeed {
        name: "InstantID",
        desc: "保持人脸一致性最好的项目。",
        url: "https://github.com/InstantID/InstantID",
    },
    RankSeed {
        name: "Freepik AI",
        desc: "实时绘图，设计师灵感库。",
        url: "https://www.freepik.com/ai",
    },
    RankSeed {
        name: "Ideogram 2.0",
        desc: "图片生成文字效果最好。",
        url: "https://ideogram.ai",
    },
    RankSeed {
        name: "Krea AI",
        desc: "实时画布，画哪里生成哪里。",
        url: "https://krea.ai",
    },
    RankSeed {
        name: "Firefly",
        desc: "版权合规，适合商业设计。",
        url: "https://firefly.adobe.com",
    },
    RankSeed {
        name: "Magnific",
        desc: "图片无损放大与细节增强。",
        url: "https://magnific.ai",
    },
    RankSeed {
        name: "Tripo SR",
        desc: "图片转 3D 模型。",
        url: "https://www.tripo3d.ai",
    },
    RankSeed {
        name: "ControlNet",
        desc: "SD 核心插件，精准控制构图。",
        url: "https://github.com/lllyasviel/ControlNet",
    },
    RankSeed {
        name: "SeaArt",
        desc: "体验接近原生 SD 的在线工具。",
        url: "https://www.seaart.ai",
    },
    RankSeed {
        name: "Tensor.art",
        desc: "在线运行模型，免费额度大。",
        url: "https://tensor.art",
    },
    RankSeed {
        name: "Clipdrop",
        desc: "移除背景/打光工具箱。",
        url: "https://clipdrop.co",
    },
    RankSeed {
        name: "Stylar",
        desc: "图层控制精准的设计工具。",
        url: "https://www.dzine.ai",
    },
    RankSeed {
        name: "ComfyUI",
        desc: "节点式工作流，探索上限。",
        url: "https://github.com/comfyanonymous/ComfyUI",
    },
];

const VIDEO_SEEDS: &[RankSeed] = &[
    RankSeed {
        name: "Runway Gen-3",
        desc: "视频生成行业标准，运镜控制。",
        url: "https://runwayml.com",
    },
    RankSeed {
        name: "Kling AI",
        desc: "生成时长最长，物理模拟真实。",
        url: "https://klingai.kuaishou.com",
    },
    RankSeed {
        name: "Luma Dream",
        desc: "生成极快，免费额度大方。",
        url: "https://lumalabs.ai",
    },
    RankSeed {
        name: "Hailuo",
        desc: "视频动态幅度大，视觉冲击强。",
        url: "https://hailuoai.com/video",
    },
    RankSeed {
        name: "Vidu",
        desc: "一键生成，人物一致性好。",
        url: "https://www.vidu.studio",
    },
    RankSeed {
        name: "Sora",
        desc: "OpenAI 期货，定义行业上限。",
        url: "https://openai.com/sora",
    },
    RankSeed {
        name: "HeyGen",
        desc: "数字人播报王者，口型同步。",
        url: "https://www.heygen.com",
    },
    RankSeed {
        name: "Pika Art",
        desc: "动画风格，局部重绘功能。",
        url: "https://pika.art",
    },
    RankSeed {
        name: "Hedra",
        desc: "专注人物对话，表情细腻。",
        url: "https://www.hedra.com",
    },
    RankSeed {
        name: "Viggle",
        desc: "让静态角色跳舞。",
        url: "https://viggle.ai",
    },
    RankSeed {
        name: "AnimateDiff",
        desc: "让静态图动起来的 SD 插件。",
        url: "https://github.com/guoyww/AnimateDiff",
    },
    RankSeed {
        name: "Suno",
        desc: "音乐生成，顺带生成 MV。",
        url: "https://suno.com",
    },
    RankSeed {
        name: "Udio",
        desc: "音质更 Hi-Fi 的音乐 AI。",
        url: "https://www.udio.com",
    },
    RankSeed {
        name: "ElevenLabs",
        desc: "全球最强 AI 配音。",
        url: "https://elevenlabs.io",
    },
    RankSeed {
        name: "Sync Labs",
        desc: "专业口型同步。",
        url: "https://synclabs.so",
    },
    RankSeed {
        name: "D-ID",
        desc: "老牌照片说话工具。",
        url: "https://www.d-id.com",
    },
    RankSeed {
        name: "Synthesia",
        desc: "企业级数字人演示。",
        url: "https://www.synthesia.io",
    },
    RankSeed {
        name: "Descript",
        desc: "像编辑文档一样编辑视频。",
        url: "https://www.descript.com",
    },
    RankSeed {
        name: "OpusClip",
        desc: "长视频自动剪辑成短视频。",
        url: "https://www.opus.pro",
    },
    RankSeed {
        name: "Kaiber",
        desc: "风格化视频转绘。",
        url: "https://kaiber.ai",
    },
];

const DEV_SEEDS: &[RankSeed] = &[
    RankSeed {
        name: "Cursor",
        desc: "AI 原生编辑器，全库理解。",
        url: "https://cursor.com",
    },
    RankSeed {
        name: "GitHub Copilot",
        desc: "开发者必备代码补全。",
        url: "https://github.com/features/copilot",
    },
    RankSeed {
        name: "v0.dev",
        desc: "文字生成 React 界面。",
        url: "https://v0.dev",
    },
    RankSeed {
        name: "Replit",
        desc: "全自动构建 Web 应用。",
        url: "https://replit.com",
    },
    RankSeed {
        name: "Hugging Face",
        desc: "全球开源模型托管中心。",
        url: "https://huggingface.co",
    },
    RankSeed {
        name: "LangChain",
        desc: "LLM 应用开发框架。",
        url: "https://www.langchain.com",
    },
    RankSeed {
        name: "Ollama",
        desc: "本地运行大模型工具。",
        url: "https://ollama.com",
    },
    RankSeed {
        name: "Supermaven",
        desc: "超长记忆代码补全，速度快。",
        url: "https://supermaven.com",
    },
    RankSeed {
        name: "Codeium",
        desc: "免费强大的代码补全。",
        url: "https://codeium.com",
    },
    RankSeed {
        name: "Devin",
        desc: "全自动 AI 软件工程师。",
        url: "https://www.cognition-labs.com/devin",
    },
    RankSeed {
        name: "Gradio",
        desc: "Python 构建 AI 演示界面。",
        url: "https://www.gradio.app",
    },
    RankSeed {
        name: "Streamlit",
        desc: "数据仪表盘开发框架。",
        url: "https://streamlit.io",
    },
    RankSeed {
        name: "Dify",
        desc: "可视化 LLM 应用编排。",
        url: "https://dify.ai",
    },
    RankSeed {
        name: "Coze",
        desc: "零代码 AI Bot 搭建。",
        url: "https://www.coze.com",
    },
    RankSeed {
        name: "Pinecone",
        desc: "AI 向量数据库。",
        url: "https://www.pinecone.io",
    },
    RankSeed {
        name: "Vercel",
        desc: "前端托管，支持 AI 应用。",
        url: "https://vercel.com",
    },
    RankSeed {
        name: "Tabnine",
        desc: "私有化代码补全。",
        url: "https://www.tabnine.com",
    },
    RankSeed {
        name: "Amazon Q",
        desc: "AWS 开发者助手。",
        url: "https://aws.amazon.com/q/developer/",
    },
    RankSeed {
        name: "W&B",
        desc: "模型训练监控平台。",
        url: "https://wandb.ai",
    },
    RankSeed {
        name: "LlamaIndex",
        desc: "LLM 数据连接框架。",
        url: "https://www.llamaindex.ai",
    },
];

pub const FILLER_NEWS: &[FillerNews] = &[
    FillerNews {
        kind: "APP",
        src: "OpenAI",
        title: "OpenAI o1 模型预览版上线",
        desc: "OpenAI 发布的全新 o1 系列模型（原草莓项目），引入了‘思维链’推理技术。这意味着模型在回答问题前会像人类一样进行深思熟虑，从而在复杂的数学、编程和科学推理任务上表现出卓越的能力，准确率大幅超越 GPT-4o。",
        url: "https://openai.com",
    },
    FillerNews {
        kind: "DEV",
        src: "Meta",
        title: "Llama 3.2 开源多模态模型",
        desc: "Meta 再次震撼开源界！Llama 3.2 是首个能够同时处理图像和文本的轻量级开源模型。它包含 11B 和 90B 两个版本，甚至还有能在手机端流畅运行的 1B/3B 版本，为边缘计算和移动端 AI 应用开发打开了新的大门。",
        url: "https://llama.meta.com",
    },
    FillerNews {
        kind: "APP",
        src: "Anthropic",
        title: "Claude 3.5 Sonnet 重大更新",
        desc: "Anthropic 发布了 Claude 3.5 Sonnet 的升级版，这次更新引入了革命性的 'Computer Use' 功能，允许 AI 像人一样控制鼠标和键盘操作电脑。此外，其代码生成能力和逻辑推理速度也得到了进一步优化，是目前开发者首选的编程助手。",
        url: "https://claude.ai",
    },
    FillerNews {
        kind: "VIDEO",
        src: "Runway",
        title: "Gen-3 Alpha 视频生成全面开放",
        desc: "好莱坞级别的 AI 视频生成工具 Runway Gen-3 Alpha 现已向公众开放。它支持极其精准的运动控制（Motion Brush）和运镜指令，能够生成长达 10 秒的高清、连贯视频，光影效果和物理规律模拟几乎达到了以假乱真的地步。",
        url: "https://runwayml.com",
    },
    FillerNews {
        kind: "APP",
        src: "Cursor",
        title: "Cursor 编辑器推出 Composer",
        desc: "VS Code 的最强竞争对手 Cursor 推出了 'Composer' 功能。它允许用户在一个窗口中同时编辑多个文件，通过自然语言指令重构整个项目的代码结构。这不仅是一个代码补全工具，更像是一个能够理解整个工程架构的 AI 结对程序员。",
        url: "https://cursor.com",
    },
    FillerNews {
        kind: "IMAGE",
        src: "BlackForest",
        title: "Flux.1 Pro 图像模型发布",
        desc: "由原 Stable Diffusion 核心团队打造的 FLUX.1 横空出世。该模型在文字渲染（Text Rendering）和手指细节处理上完爆了 Midjourney v6。作为目前最强的开源生图模型，它支持本地部署，并且对提示词的语义理解达到了新的高度。",
        url: "https://blackforestlabs.ai",
    },
    FillerNews {
        kind: "APP",
        src: "Google",
        title: "NotebookLM 音频概览功能",
        desc: "Google 的 NotebookLM 增加了一个病毒式传播的功能：Audio Overview。它可以将你上传的任何 PDF、文档或链接，一键转化成一段两名 AI 主持人之间的精彩播客对话。语气自然、充满幽默感，是学习新知识的神器。",
        url: "https://notebooklm.google.com",
    },
    FillerNews {
        kind: "VIDEO",
        src: "Kuaishou",
        title: "可灵 AI (Kling) 网页版上线",
        desc: "快手团队研发的‘可灵’视频生成大模型，被誉为中国版的 Sora。它支持生成长达 2 分钟的视频（需延长），并且在人物动作幅度、吞咽食物等物理模拟上表现惊人。现在网页版已面向全球用户开放，支持图生视频和文生视频。",
        url: "https://klingai.kuaishou.com",
    },
    FillerNews {
        kind: "APP",
        src: "Midjourney",
        title: "Midjourney 网页编辑器公测",
        desc: "Midjourney 终于摆脱了 Discord！全新的网页版编辑器上线，支持局部重绘（Inpainting）、画布扩展（Outpainting）以及通过拖拽来修改图片构图。这是一个巨大的交互飞跃，让不懂代码的设计师也能轻松使用顶级 AI 绘画。",
        url: "https://midjourney.com",
    },
    FillerNews {
        kind: "APP",
        src: "Perplexity",
        title: "Perplexity Pro 推出深度推理",
        desc: "AI 搜索引擎 Perplexity 引入了 o1 级别的推理模型。当你询问复杂的学术或分析类问题时，它会进行多步骤的深度搜索和逻辑链推导，最后给出一份引用详实、逻辑严密的专业报告，而非简单的搜索摘要。",
        url: "https://perplexity.ai",
    },
];

const PROMPTS: &[PromptSeed] = &[
    PromptSeed {
        tag: "万能通用",
        title: "RTF 标准提问法",
        content: "[角色 Role]: 你是资深产品经理\n[任务 Task]: 请分析这份竞品报告\n[格式 Format]: 输出为带图表的 Markdown 格式",
        desc: "最基础也最有效的结构：指定角色、明确任务、规定格式。",
    },
    PromptSeed {
        tag: "复杂任务",
        title: "BROKE 深度思考法",
        content: "[背景 Background]: 我们正在开发一款AI应用...\n[角色 Role]: 你是首席架构师\n[目标 Objectives]: 设计后端架构\n[关键结果 Key Results]: 高并发、低延迟\n[演变 Evolve]: 如果用户量翻倍，架构如何调整？",
        desc: "适用于需要深度推理和多步规划的复杂任务。",
    },
    PromptSeed {
        tag: "精准控制",
        title: "C.R.E.A.T.E 框架",
        content: "[Context]: 上下文背景\n[Role]: 设定AI身份\n[Explicit]: 明确具体的限制条件\n[Action]: 需要执行的动作\n[Tone]: 语调（专业/幽默/严肃）\n[Example]: 给出一个参考范例",
        desc: "目前公认生成质量最高的精细化控制框架。",
    },
    PromptSeed {
        tag: "Video Gen",
        title: "Runway/Sora 电影级公式",
        content: "[主体描述] + [环境背景] + [摄影机运动 Camera Movement] + [光线/氛围] + [风格 Style]\n例如: A wide shot of a cyberpunk city street at night, neon reflection on wet ground, drone camera slowly flying forward, cinematic lighting, film grain.",
        desc: "生成高质量视频的核心要素：运镜、光影与风格。",
    },
    PromptSeed {
        tag: "Video Gen",
        title: "数字人口播公式 (HeyGen)",
        content: "[角色形象]: 穿着西装的专业新闻主播\n[背景]: 现代化的演播室大屏幕\n[表情/动作]: 面带微笑，手势自然，眼神注视镜头\n[脚本内容]: (粘贴你的台词)",
        desc: "用于生成高质量 AI 数字人视频的脚本结构。",
    },
    PromptSeed {
        tag: "Midjourney",
        title: "MJ 摄影写实公式",
        content: "/imagine prompt: [主体描述] + [环境背景] + [摄影角度/镜头] + [光线条件] + [相机型号/胶片类型] --ar 16:9 --v 6.0 --style raw",
        desc: "生成照片级逼真图像的黄金公式。",
    },
    PromptSeed {
        tag: "Stable Diff",
        title: "SD 正负向起手式",
        content: "Positive: (masterpiece, best quality:1.2), [Subject], [Style Tags], 4k, 8k\nNegative: (worst quality, low quality:1.4), bad anatomy, watermark, text",
        desc: "Stable Diffusion 必备的起手质量控制词。",
    },
    PromptSeed {
        tag: "Coding",
        title: "代码专家 Debug",
        content: "你是一个 [语言] 专家。请分析以下代码：\n1. 解释这段代码的功能\n2. 指出潜在的 Bug 或性能瓶颈\n3. 给出优化后的代码并添加注释\n[粘贴代码]",
        desc: "让 AI 成为你的结对编程导师。",
    },
    PromptSeed {
        tag: "Academic",
        title: "论文润色 (降重)",
        content: "请作为[学科]领域的审稿人，对以下段落进行润色。\n要求：保持原意，提升学术性，使用更专业的词汇，调整句式结构以降低查重率。",
        desc: "学术论文投稿前的最后优化。",
    },
    PromptSeed {
        tag: "Marketing",
        title: "小红书爆款公式",
        content: "[标题]: 包含emoji，制造悬念/焦虑/惊喜\n[正文]: 痛点场景 + 解决方案 + 情绪价值\n[结尾]: 引导互动 (点赞/收藏)\n[标签]: #热门话题",
        desc: "符合算法推荐逻辑的社交媒体文案结构。",
    },
    PromptSeed {
        tag: "Business",
        title: "SWOT 战略分析",
        content: "请对 [公司/产品] 进行 SWOT 分析：\nStrengths (优势)\nWeaknesses (劣势)\nOpportunities (机会)\nThreats (威胁)\n并基于分析给出3条战略建议。",
        desc: "商业计划书必备的分析框架。",
    },
    PromptSeed {
        tag: "Learning",
        title: "费曼学习法",
        content: "请用“费曼技巧”给我讲解 [复杂概念]。\n要求：用像给12岁孩子讲故事一样的简单语言，使用类比，不要使用行话。",
        desc: "快速搞懂一个陌生领域的最佳捷径。",
    },
];
